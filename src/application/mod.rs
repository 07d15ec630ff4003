//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer sits between callers and the pure typology domain. Following CQRS,
//! it separates the calculation command from read-only queries.

pub mod handlers;

pub use handlers::{
    CalculateTypeCommand, CalculateTypeHandler, GetArchetypeHandler, GetArchetypeQuery,
    ListQuestionsHandler, ListQuestionsQuery, QuestionView,
};
