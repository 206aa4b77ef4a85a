//! Core domain entities.
//!
//! - [`Link`] - A short code to long URL mapping
//! - [`LinkStats`] - A mapping together with its click counter
//! - [`ShortenOutcome`] - Result of a submission, created or reused

pub mod link;

pub use link::{Link, LinkStats, ShortenOutcome};
