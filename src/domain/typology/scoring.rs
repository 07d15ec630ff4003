//! Scoring strategies - turn responses into eight signed function scores.
//!
//! # Algorithm
//!
//! 1. Every usable response looks up its question and takes a base weight from
//!    the question class.
//! 2. Function questions add the weight to the extroverted form of the axis for
//!    `true`, to the introverted form for `false`. Strategies with a contrast
//!    factor also subtract `weight × contrast` from the form not chosen.
//! 3. Dichotomy questions feed an E/I and a J/P tally instead.
//! 4. The tallies then scale theory-consistent positive scores by a small bonus
//!    (at most the axis bonus, e.g. 10%), so they nudge but never override.
//!
//! Scoring is a pure function of its input: empty or all-null responses give
//! all-zero scores.

use serde::{Deserialize, Serialize};

use super::function::{CognitiveFunction, FunctionScores};
use super::question::{DichotomyAxis, QuestionAxis, QuestionClass};
use super::response::{DichotomyTally, Lean, Response};

use CognitiveFunction::*;

/// Bonus applied per unit of E/I lean.
pub const EI_BONUS: f64 = 0.1;
/// Bonus applied per unit of J/P lean.
pub const JP_BONUS: f64 = 0.08;
/// Share of the bonus given to the secondary functions of a lean.
pub const SECONDARY_BONUS_FACTOR: f64 = 0.7;
/// Extra multiplier on function-order questions in stack-aware scoring.
pub const ORDER_AMPLIFIER: f64 = 1.5;
/// Share of a weight subtracted from the unchosen function in stack-aware scoring.
pub const CONTRAST_FACTOR: f64 = 0.25;

/// Converts responses into function scores.
pub trait ScoringStrategy: Send + Sync {
    /// Stable name reported in calculation results.
    fn name(&self) -> &'static str;

    fn score_responses(&self, responses: &[Response]) -> FunctionScores;
}

/// Base weight per question class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub function_preference: f64,
    pub function_order: f64,
    pub traditional_dichotomy: f64,
}

impl ScoringWeights {
    pub const UNIFORM: Self = Self {
        function_preference: 1.0,
        function_order: 1.0,
        traditional_dichotomy: 1.0,
    };

    pub const STACK_AWARE: Self = Self {
        function_preference: 1.0,
        function_order: 1.5,
        traditional_dichotomy: 1.0,
    };

    pub fn weight_for(&self, class: QuestionClass) -> f64 {
        match class {
            QuestionClass::FunctionPreference => self.function_preference,
            QuestionClass::FunctionOrder => self.function_order,
            QuestionClass::TraditionalDichotomy => self.traditional_dichotomy,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STACK_AWARE
    }
}

/// Size of the multiplicative nudge the dichotomy tallies give.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DichotomyBonus {
    pub extraversion_introversion: f64,
    pub judging_perceiving: f64,
    pub secondary_factor: f64,
}

impl Default for DichotomyBonus {
    fn default() -> Self {
        Self {
            extraversion_introversion: EI_BONUS,
            judging_perceiving: JP_BONUS,
            secondary_factor: SECONDARY_BONUS_FACTOR,
        }
    }
}

impl DichotomyBonus {
    /// Functions that a lean reinforces fully, and those it reinforces at the
    /// secondary factor.
    fn targets(axis: DichotomyAxis, lean: Lean) -> Option<([CognitiveFunction; 2], [CognitiveFunction; 2])> {
        match (axis, lean) {
            (DichotomyAxis::ExtraversionIntroversion, Lean::First) => Some(([Ne, Se], [Te, Fe])),
            (DichotomyAxis::ExtraversionIntroversion, Lean::Second) => Some(([Ni, Si], [Ti, Fi])),
            (DichotomyAxis::JudgingPerceiving, Lean::First) => Some(([Te, Fe], [Ni, Si])),
            (DichotomyAxis::JudgingPerceiving, Lean::Second) => Some(([Ne, Se], [Ti, Fi])),
            (_, Lean::Balanced) => None,
        }
    }

    fn axis_bonus(&self, axis: DichotomyAxis) -> f64 {
        match axis {
            DichotomyAxis::ExtraversionIntroversion => self.extraversion_introversion,
            DichotomyAxis::JudgingPerceiving => self.judging_perceiving,
        }
    }

    /// Scales positive scores of the functions the tallies favour.
    pub fn apply(&self, scores: &mut FunctionScores, tally: &DichotomyTally) {
        for axis in [DichotomyAxis::ExtraversionIntroversion, DichotomyAxis::JudgingPerceiving] {
            let Some((primary, secondary)) = Self::targets(axis, tally.lean(axis)) else {
                continue;
            };
            let bonus = self.axis_bonus(axis) * tally.strength(axis);
            for function in primary {
                boost(scores, function, bonus);
            }
            for function in secondary {
                boost(scores, function, bonus * self.secondary_factor);
            }
        }
    }
}

fn boost(scores: &mut FunctionScores, function: CognitiveFunction, bonus: f64) {
    if scores[function] > 0.0 {
        scores[function] *= 1.0 + bonus;
    }
}

/// Shared accumulation pass used by every scoring strategy.
fn accumulate(
    responses: &[Response],
    weight_of: impl Fn(QuestionClass) -> f64,
    contrast: f64,
) -> (FunctionScores, DichotomyTally) {
    let mut scores = FunctionScores::zero();
    let mut tally = DichotomyTally::default();

    for response in responses {
        // Out-of-range indices and unsure answers are skipped
        let (Some(question), Some(value)) = (response.question(), response.value) else {
            continue;
        };
        let weight = weight_of(question.question_class);

        match question.axis {
            QuestionAxis::Function(axis) => {
                let chosen = if value {
                    axis.extroverted()
                } else {
                    axis.introverted()
                };
                scores.add(chosen, weight);
                if contrast > 0.0 {
                    scores.add(chosen.counterpart(), -weight * contrast);
                }
            }
            QuestionAxis::Dichotomy(axis) => tally.record(axis, value, weight),
        }
    }

    (scores, tally)
}

/// Baseline: every question class weighs the same.
#[derive(Debug, Clone, Default)]
pub struct UniformScoring {
    bonus: DichotomyBonus,
}

impl UniformScoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bonus(bonus: DichotomyBonus) -> Self {
        Self { bonus }
    }
}

impl ScoringStrategy for UniformScoring {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn score_responses(&self, responses: &[Response]) -> FunctionScores {
        let (mut scores, tally) =
            accumulate(responses, |class| ScoringWeights::UNIFORM.weight_for(class), 0.0);
        self.bonus.apply(&mut scores, &tally);
        scores
    }
}

/// Weighs function-order questions more heavily and contrasts each answer
/// against the unchosen form of the axis.
#[derive(Debug, Clone)]
pub struct StackAwareScoring {
    weights: ScoringWeights,
    order_amplifier: f64,
    contrast_factor: f64,
    bonus: DichotomyBonus,
}

impl Default for StackAwareScoring {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::STACK_AWARE,
            order_amplifier: ORDER_AMPLIFIER,
            contrast_factor: CONTRAST_FACTOR,
            bonus: DichotomyBonus::default(),
        }
    }
}

impl StackAwareScoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_order_amplifier(mut self, order_amplifier: f64) -> Self {
        self.order_amplifier = order_amplifier;
        self
    }

    pub fn with_contrast_factor(mut self, contrast_factor: f64) -> Self {
        self.contrast_factor = contrast_factor;
        self
    }

    pub fn with_bonus(mut self, bonus: DichotomyBonus) -> Self {
        self.bonus = bonus;
        self
    }

    fn effective_weight(&self, class: QuestionClass) -> f64 {
        let base = self.weights.weight_for(class);
        if class == QuestionClass::FunctionOrder {
            base * self.order_amplifier
        } else {
            base
        }
    }
}

impl ScoringStrategy for StackAwareScoring {
    fn name(&self) -> &'static str {
        "stack-aware"
    }

    fn score_responses(&self, responses: &[Response]) -> FunctionScores {
        let (mut scores, tally) = accumulate(
            responses,
            |class| self.effective_weight(class),
            self.contrast_factor,
        );
        self.bonus.apply(&mut scores, &tally);
        scores
    }
}
