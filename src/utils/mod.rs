//! Utility functions for code generation, URL checks, and request handling.
//!
//! - [`code_generator`] - Hash-based short code generation and custom code validation
//! - [`url_validator`] - Syntactic validation of submitted URLs
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
