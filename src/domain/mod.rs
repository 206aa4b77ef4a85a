//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (links and their statistics)
//! - [`repositories`] - The [`repositories::MappingStore`] contract implemented
//!   by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Workflows built on top of it live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
