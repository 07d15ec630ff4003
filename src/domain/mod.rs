//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (confidence, errors)
//! - `typology` - Question bank, scoring, stack building and type matching

pub mod foundation;
pub mod typology;
