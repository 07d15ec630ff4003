//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod typology;

pub use typology::{
    CalculateTypeCommand, CalculateTypeHandler, GetArchetypeHandler, GetArchetypeQuery,
    ListQuestionsHandler, ListQuestionsQuery, QuestionView,
};
