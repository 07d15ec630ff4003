//! CalculateTypeHandler - Command handler that runs a calculation.

use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::typology::{CalculationResult, Response, TypeCalculator};

/// Command to infer a personality type from questionnaire answers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CalculateTypeCommand {
    pub responses: Vec<Response>,
}

impl CalculateTypeCommand {
    pub fn new(responses: Vec<Response>) -> Self {
        Self { responses }
    }
}

/// Handler for type calculations.
///
/// Cheap to clone; every clone shares the same calculator.
#[derive(Debug, Clone)]
pub struct CalculateTypeHandler {
    calculator: Arc<TypeCalculator>,
}

impl CalculateTypeHandler {
    pub fn new(calculator: Arc<TypeCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, cmd: CalculateTypeCommand) -> Result<CalculationResult, DomainError> {
        debug!(responses = cmd.responses.len(), "Handling type calculation");

        let result = self.calculator.calculate(&cmd.responses)?;

        debug!(
            personality_type = %result.personality_type,
            confidence = result.confidence.value(),
            "Type calculation complete"
        );
        Ok(result)
    }
}
