//! GetArchetypeHandler - Query handler for archetype descriptions.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::typology::{Archetype, PersonalityType};

/// Query an archetype by its four-letter code.
#[derive(Debug, Clone)]
pub struct GetArchetypeQuery {
    pub code: String,
}

/// Handler for archetype lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetArchetypeHandler;

impl GetArchetypeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetArchetypeQuery) -> Result<&'static Archetype, DomainError> {
        let personality_type: PersonalityType = query.code.parse().map_err(|err| {
            DomainError::new(ErrorCode::UnknownType, format!("{}", err)).with_detail("code", query.code.clone())
        })?;
        Ok(Archetype::find(personality_type))
    }
}
