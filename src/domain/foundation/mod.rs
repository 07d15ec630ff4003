//! Foundation module - Shared domain primitives.
//!
//! Error vocabulary and the value objects reused across the typology domain.

mod confidence;
mod errors;

pub use confidence::Confidence;
pub use errors::{DomainError, ErrorCode, ValidationError};
