//! langid Core
//!
//! Core types and utilities shared across langid components.
//!
//! This crate provides:
//! - Error types and result handling
//! - Request/response wire types for the detection API
//! - The natural-language allow-list used to tell prose from code

pub mod error;
pub mod language;
pub mod types;

pub use error::{Error, Result};
pub use language::{is_code, is_natural_language, NATURAL_LANGUAGES};
pub use types::{DetectRequest, Detection, ErrorBody, HealthStatus};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::language::{is_code, is_natural_language};
    pub use crate::types::{DetectRequest, Detection, HealthStatus};
}
