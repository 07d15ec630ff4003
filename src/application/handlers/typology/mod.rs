//! Typology command and query handlers.

mod calculate_type;
mod get_archetype;
mod list_questions;

pub use calculate_type::{CalculateTypeCommand, CalculateTypeHandler};
pub use get_archetype::{GetArchetypeHandler, GetArchetypeQuery};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery, QuestionView};
