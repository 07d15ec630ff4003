//! Typology module - cognitive-function personality type inference.
//!
//! A respondent answers the yes/no items in [`QUESTION_BANK`]. The answers
//! flow through three pluggable stages:
//!
//! 1. a [`ScoringStrategy`] turns responses into [`FunctionScores`]
//! 2. a [`StackBuildingStrategy`] orders those scores into a [`CognitiveStack`]
//! 3. a [`TypeMatchingStrategy`] ranks all 16 [`Archetype`]s against the stack
//!
//! [`TypeCalculator`] composes one strategy of each family. Everything here is
//! pure and synchronous: same responses and strategies, same result.

mod archetype;
mod calculator;
mod function;
mod matching;
mod question;
mod response;
mod scoring;
mod stack;
mod stack_building;

pub use archetype::{Archetype, PersonalityType, ARCHETYPES};
pub use calculator::{
    CalculationError, CalculationResult, StrategyNames, StrategyPreset, TypeCalculator,
};
pub use function::{Attitude, CognitiveFunction, FunctionAxis, FunctionCategory, FunctionScores};
pub use matching::{
    ExactTypeMatcher, FlexibleTypeMatcher, MatchWeights, TypeMatchResult, TypeMatchingStrategy,
    DISTANCE_PENALTY, MATCH_POSITION_WEIGHTS, MISMATCH_DISCOUNT,
};
pub use question::{
    DichotomyAxis, Question, QuestionAxis, QuestionBank, QuestionClass, QUESTION_BANK,
};
pub use response::{usable_responses, DichotomyTally, Lean, Response};
pub use scoring::{
    DichotomyBonus, ScoringStrategy, ScoringWeights, StackAwareScoring, UniformScoring,
    CONTRAST_FACTOR, EI_BONUS, JP_BONUS, ORDER_AMPLIFIER, SECONDARY_BONUS_FACTOR,
};
pub use stack::{validate_stack, CognitiveFunctionSlot, CognitiveStack, STACK_SIZE};
pub use stack_building::{
    fallback_stack, StackBuildingStrategy, TheoryBasedStackBuilder, TypeFirstStackBuilder,
    STACK_POSITION_WEIGHTS,
};
