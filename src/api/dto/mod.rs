//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod index;
pub mod shorten;
pub mod stats;
