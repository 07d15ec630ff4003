//! Type Calculator - composes one strategy of each family into `calculate`.
//!
//! ```
//! use cognitive_typology::domain::typology::{Response, StrategyPreset, TypeCalculator};
//!
//! let calculator = TypeCalculator::from_preset(StrategyPreset::Accurate);
//! let responses: Vec<_> = (0..40).map(|i| Response::new(i, Some(i % 2 == 0))).collect();
//!
//! let result = calculator.calculate(&responses).unwrap();
//! assert_eq!(result.alternative_types.len(), 16);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use super::archetype::PersonalityType;
use super::function::FunctionScores;
use super::matching::{ExactTypeMatcher, FlexibleTypeMatcher, TypeMatchResult, TypeMatchingStrategy};
use super::response::{usable_responses, Response};
use super::scoring::{ScoringStrategy, StackAwareScoring, UniformScoring};
use super::stack::{validate_stack, CognitiveStack};
use super::stack_building::{
    fallback_stack, StackBuildingStrategy, TheoryBasedStackBuilder, TypeFirstStackBuilder,
};
use crate::domain::foundation::{Confidence, DomainError, ErrorCode};

/// Errors raised by [`TypeCalculator::calculate`] and preset lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("No answered questions among {received} responses")]
    NoValidResponses { received: usize },

    #[error("Unknown strategy preset '{0}'")]
    UnknownPreset(String),

    #[error("Matcher '{matcher}' returned no archetypes")]
    EmptyRanking { matcher: &'static str },
}

impl From<CalculationError> for DomainError {
    fn from(err: CalculationError) -> Self {
        let code = match &err {
            CalculationError::NoValidResponses { .. } => ErrorCode::NoValidResponses,
            CalculationError::UnknownPreset(_) => ErrorCode::UnknownPreset,
            CalculationError::EmptyRanking { .. } => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Named, tested strategy combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyPreset {
    /// Stack-aware scoring, theory-based building, exact matching.
    #[default]
    Accurate,
    /// Stack-aware scoring, type-first building, exact matching.
    TypeFirst,
    /// Stack-aware scoring, theory-based building, flexible matching.
    Flexible,
    /// Uniform scoring, theory-based building, exact matching.
    Baseline,
}

impl StrategyPreset {
    pub const ALL: [StrategyPreset; 4] = [
        StrategyPreset::Accurate,
        StrategyPreset::TypeFirst,
        StrategyPreset::Flexible,
        StrategyPreset::Baseline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::TypeFirst => "type-first",
            Self::Flexible => "flexible",
            Self::Baseline => "baseline",
        }
    }
}

impl fmt::Display for StrategyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyPreset {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == wanted)
            .ok_or_else(|| CalculationError::UnknownPreset(s.to_string()))
    }
}

/// Which strategies produced a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyNames {
    pub scoring: String,
    pub stack_building: String,
    pub matching: String,
}

/// Everything a results view needs from one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Best-matching type.
    pub personality_type: PersonalityType,
    /// The stack built from the respondent's scores.
    pub stack: CognitiveStack,
    pub confidence: Confidence,
    pub scores: FunctionScores,
    /// All 16 archetypes ranked by descending score; the first entry is the
    /// primary type.
    pub alternative_types: Vec<TypeMatchResult>,
    pub strategies: StrategyNames,
}

impl CalculationResult {
    /// The ranked types after the primary one, at most `count` of them.
    pub fn runners_up(&self, count: usize) -> &[TypeMatchResult] {
        let end = (count + 1).min(self.alternative_types.len());
        self.alternative_types.get(1..end).unwrap_or(&[])
    }
}

/// Runs scoring, stack building and matching with swappable strategies.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct TypeCalculator {
    scoring: Box<dyn ScoringStrategy>,
    stack_builder: Box<dyn StackBuildingStrategy>,
    matcher: Box<dyn TypeMatchingStrategy>,
}

impl TypeCalculator {
    pub fn new(
        scoring: Box<dyn ScoringStrategy>,
        stack_builder: Box<dyn StackBuildingStrategy>,
        matcher: Box<dyn TypeMatchingStrategy>,
    ) -> Self {
        Self {
            scoring,
            stack_builder,
            matcher,
        }
    }

    pub fn from_preset(preset: StrategyPreset) -> Self {
        match preset {
            StrategyPreset::Accurate => Self::new(
                Box::new(StackAwareScoring::new()),
                Box::new(TheoryBasedStackBuilder::new()),
                Box::new(ExactTypeMatcher::new()),
            ),
            StrategyPreset::TypeFirst => Self::new(
                Box::new(StackAwareScoring::new()),
                Box::new(TypeFirstStackBuilder::new()),
                Box::new(ExactTypeMatcher::new()),
            ),
            StrategyPreset::Flexible => Self::new(
                Box::new(StackAwareScoring::new()),
                Box::new(TheoryBasedStackBuilder::new()),
                Box::new(FlexibleTypeMatcher::new()),
            ),
            StrategyPreset::Baseline => Self::new(
                Box::new(UniformScoring::new()),
                Box::new(TheoryBasedStackBuilder::new()),
                Box::new(ExactTypeMatcher::new()),
            ),
        }
    }

    pub fn set_scoring(&mut self, scoring: Box<dyn ScoringStrategy>) {
        self.scoring = scoring;
    }

    pub fn set_stack_builder(&mut self, stack_builder: Box<dyn StackBuildingStrategy>) {
        self.stack_builder = stack_builder;
    }

    pub fn set_matcher(&mut self, matcher: Box<dyn TypeMatchingStrategy>) {
        self.matcher = matcher;
    }

    pub fn strategies(&self) -> StrategyNames {
        StrategyNames {
            scoring: self.scoring.name().to_string(),
            stack_building: self.stack_builder.name().to_string(),
            matching: self.matcher.name().to_string(),
        }
    }

    /// Scores, builds and matches the given responses.
    ///
    /// Unsure answers and out-of-range indices are dropped first.
    ///
    /// # Errors
    ///
    /// - `NoValidResponses` when nothing usable remains
    /// - `EmptyRanking` when the matcher returns no archetypes
    pub fn calculate(&self, responses: &[Response]) -> Result<CalculationResult, CalculationError> {
        let usable = usable_responses(responses);
        if usable.is_empty() {
            return Err(CalculationError::NoValidResponses {
                received: responses.len(),
            });
        }

        let scores = self.scoring.score_responses(&usable);

        let mut stack = self.stack_builder.build_stack(&scores);
        if !validate_stack(&stack) {
            warn!(
                builder = self.stack_builder.name(),
                stack = %stack,
                "Stack builder produced an invalid stack, repairing by rank order"
            );
            stack = fallback_stack(&scores);
        }

        let ranked = self.matcher.find_best_matches(&stack, &usable);
        let (personality_type, confidence) = ranked
            .first()
            .map(|top| (top.personality_type, top.confidence))
            .ok_or(CalculationError::EmptyRanking {
                matcher: self.matcher.name(),
            })?;

        debug!(
            personality_type = %personality_type,
            confidence = confidence.value(),
            stack = %stack,
            answered = usable.len(),
            scoring = self.scoring.name(),
            stack_building = self.stack_builder.name(),
            matching = self.matcher.name(),
            "Calculated personality type"
        );

        Ok(CalculationResult {
            personality_type,
            stack,
            confidence,
            scores,
            alternative_types: ranked,
            strategies: self.strategies(),
        })
    }
}

impl Default for TypeCalculator {
    fn default() -> Self {
        Self::from_preset(StrategyPreset::default())
    }
}

impl fmt::Debug for TypeCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCalculator")
            .field("scoring", &self.scoring.name())
            .field("stack_builder", &self.stack_builder.name())
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::typology::function::CognitiveFunction::*;
    use crate::domain::typology::question::QuestionBank;

    struct BrokenBuilder;

    impl StackBuildingStrategy for BrokenBuilder {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn build_stack(&self, _scores: &FunctionScores) -> CognitiveStack {
            CognitiveStack::from_functions([Ni, Ni, Ni, Ni])
        }
    }

    struct EmptyMatcher;

    impl TypeMatchingStrategy for EmptyMatcher {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn find_best_matches(&self, _stack: &CognitiveStack, _responses: &[Response]) -> Vec<TypeMatchResult> {
            Vec::new()
        }
    }

    fn mixed_responses() -> Vec<Response> {
        (0..QuestionBank::len())
            .map(|i| Response::new(i, Some(i % 3 != 0)))
            .collect()
    }

    #[test]
    fn empty_input_is_an_error() {
        let calculator = TypeCalculator::default();
        assert_eq!(
            calculator.calculate(&[]),
            Err(CalculationError::NoValidResponses { received: 0 })
        );
    }

    #[test]
    fn all_null_input_is_an_error() {
        let calculator = TypeCalculator::default();
        let responses: Vec<_> = (0..5).map(Response::unsure).collect();
        assert_eq!(
            calculator.calculate(&responses),
            Err(CalculationError::NoValidResponses { received: 5 })
        );
    }

    #[test]
    fn out_of_range_only_input_is_an_error() {
        let calculator = TypeCalculator::default();
        assert!(calculator.calculate(&[Response::yes(99)]).is_err());
    }

    #[test]
    fn single_answer_is_enough() {
        let calculator = TypeCalculator::default();
        let result = calculator.calculate(&[Response::unsure(0), Response::yes(1)]);
        assert!(result.is_ok());
    }

    #[test]
    fn result_reports_strategy_names() {
        let result = TypeCalculator::from_preset(StrategyPreset::TypeFirst)
            .calculate(&mixed_responses())
            .unwrap();
        assert_eq!(result.strategies.scoring, "stack-aware");
        assert_eq!(result.strategies.stack_building, "type-first");
        assert_eq!(result.strategies.matching, "exact");
    }

    #[test]
    fn primary_type_is_top_of_ranking() {
        let result = TypeCalculator::default().calculate(&mixed_responses()).unwrap();
        assert_eq!(result.alternative_types.len(), 16);
        assert_eq!(result.personality_type, result.alternative_types[0].personality_type);
        assert_eq!(result.confidence, result.alternative_types[0].confidence);
        assert_eq!(result.runners_up(5).len(), 5);
    }

    #[test]
    fn swapping_strategy_takes_effect_on_next_call() {
        let mut calculator = TypeCalculator::default();
        assert_eq!(calculator.strategies().matching, "exact");

        calculator.set_matcher(Box::new(FlexibleTypeMatcher::new()));
        calculator.set_scoring(Box::new(UniformScoring::new()));
        let result = calculator.calculate(&mixed_responses()).unwrap();
        assert_eq!(result.strategies.matching, "flexible");
        assert_eq!(result.strategies.scoring, "uniform");
    }

    #[test]
    fn invalid_stack_from_builder_is_repaired() {
        let mut calculator = TypeCalculator::default();
        calculator.set_stack_builder(Box::new(BrokenBuilder));
        let result = calculator.calculate(&mixed_responses()).unwrap();
        assert!(validate_stack(&result.stack));
    }

    #[test]
    fn empty_ranking_is_reported() {
        let mut calculator = TypeCalculator::default();
        calculator.set_matcher(Box::new(EmptyMatcher));
        assert_eq!(
            calculator.calculate(&mixed_responses()),
            Err(CalculationError::EmptyRanking { matcher: "empty" })
        );
    }

    #[test]
    fn presets_parse_from_names() {
        for preset in StrategyPreset::ALL {
            assert_eq!(preset.as_str().parse::<StrategyPreset>().unwrap(), preset);
        }
        assert_eq!(" Type-First ".parse::<StrategyPreset>().unwrap(), StrategyPreset::TypeFirst);
        assert_eq!(
            "fastest".parse::<StrategyPreset>(),
            Err(CalculationError::UnknownPreset("fastest".to_string()))
        );
    }

    #[test]
    fn preset_serde_uses_kebab_case() {
        let json = serde_json::to_string(&StrategyPreset::TypeFirst).unwrap();
        assert_eq!(json, "\"type-first\"");
    }

    #[test]
    fn calculation_error_maps_to_domain_code() {
        let err: DomainError = CalculationError::NoValidResponses { received: 0 }.into();
        assert_eq!(err.code, ErrorCode::NoValidResponses);
    }

    #[test]
    fn result_serializes_for_results_view() {
        let result = TypeCalculator::default().calculate(&mixed_responses()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["personality_type"].is_string());
        assert!(json["confidence"].is_u64());
        assert_eq!(json["stack"].as_array().map(|s| s.len()), Some(4));
        assert!(json["scores"]["Ni"].is_number());
        assert_eq!(json["strategies"]["stack_building"], "theory-based");
    }

    #[test]
    fn debug_lists_strategy_names() {
        let debug = format!("{:?}", TypeCalculator::from_preset(StrategyPreset::Baseline));
        assert!(debug.contains("uniform"));
        assert!(debug.contains("theory-based"));
    }
}
