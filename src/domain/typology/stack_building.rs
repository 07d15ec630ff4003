//! Stack building strategies - order function scores into a 4-slot stack.
//!
//! Two interchangeable builders:
//!
//! - [`TheoryBasedStackBuilder`] builds bottom-up from the ranked scores,
//!   applying the dominant/auxiliary/tertiary/inferior placement rules.
//! - [`TypeFirstStackBuilder`] picks the archetype whose canonical stack best
//!   fits the scores and returns that stack verbatim.
//!
//! Rankings always break ties by the fixed order in
//! [`CognitiveFunction::ALL`], never by container iteration order.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::archetype::Archetype;
use super::function::{CognitiveFunction, FunctionScores};
use super::stack::{CognitiveStack, STACK_SIZE};

/// Weight of each stack position when fitting archetypes to raw scores.
pub const STACK_POSITION_WEIGHTS: [f64; STACK_SIZE] = [1.0, 0.7, 0.4, 0.2];

/// Orders function scores into a cognitive stack.
pub trait StackBuildingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn build_stack(&self, scores: &FunctionScores) -> CognitiveStack;
}

/// Builds the stack slot by slot from the score ranking.
///
/// - Dominant: highest score.
/// - Auxiliary: opposite attitude and opposite category to the dominant.
/// - Tertiary: dominant's attitude, auxiliary's category, other axis.
/// - Inferior: dominant's category, opposite attitude, other axis.
///
/// Only finite scores are eligible. When a slot has no eligible candidate the
/// stack is filled by [`fallback_stack`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TheoryBasedStackBuilder;

impl TheoryBasedStackBuilder {
    pub fn new() -> Self {
        Self
    }

    fn theory_order(eligible: &[CognitiveFunction]) -> Option<[CognitiveFunction; STACK_SIZE]> {
        let dominant = *eligible.first()?;
        let pick = |predicate: &dyn Fn(CognitiveFunction) -> bool| {
            eligible.iter().copied().find(|&f| predicate(f))
        };

        let auxiliary = pick(&|f| {
            f.attitude() == dominant.attitude().opposite()
                && f.category() == dominant.category().opposite()
        })?;
        let tertiary = pick(&|f| {
            f.attitude() == dominant.attitude()
                && f.category() == auxiliary.category()
                && f.axis() != auxiliary.axis()
        })?;
        let inferior = pick(&|f| {
            f.attitude() != dominant.attitude()
                && f.category() == dominant.category()
                && f.axis() != dominant.axis()
        })?;

        Some([dominant, auxiliary, tertiary, inferior])
    }
}

impl StackBuildingStrategy for TheoryBasedStackBuilder {
    fn name(&self) -> &'static str {
        "theory-based"
    }

    fn build_stack(&self, scores: &FunctionScores) -> CognitiveStack {
        let eligible: Vec<_> = scores
            .ranked()
            .into_iter()
            .filter(|(_, score)| score.is_finite())
            .map(|(function, _)| function)
            .collect();

        match Self::theory_order(&eligible) {
            Some(functions) => CognitiveStack::from_functions(functions),
            None => {
                warn!(
                    eligible = eligible.len(),
                    "Scores do not satisfy stack placement rules, falling back to rank order"
                );
                fallback_stack(scores)
            }
        }
    }
}

/// Fills the stack by raw rank while keeping functions distinct and attitudes
/// alternating.
///
/// Each slot takes the highest-ranked unused function whose attitude is the
/// opposite of the previous slot. Four functions exist per attitude and at
/// most two are used, so every slot always finds a candidate.
pub fn fallback_stack(scores: &FunctionScores) -> CognitiveStack {
    let ranked: Vec<_> = scores.ranked().into_iter().map(|(f, _)| f).collect();
    let mut functions = [ranked[0]; STACK_SIZE];

    for position in 1..STACK_SIZE {
        let required = functions[position - 1].attitude().opposite();
        let used = &functions[..position];
        if let Some(next) = ranked
            .iter()
            .copied()
            .find(|f| f.attitude() == required && !used.contains(f))
        {
            functions[position] = next;
        }
    }

    CognitiveStack::from_functions(functions)
}

/// Picks the best-fitting archetype and returns its canonical stack.
///
/// Fit is `Σ weight[i] × score[canonical[i]]`; ties go to the archetype listed
/// first. The result is theory-compliant by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeFirstStackBuilder {
    position_weights: [f64; STACK_SIZE],
}

impl Default for TypeFirstStackBuilder {
    fn default() -> Self {
        Self {
            position_weights: STACK_POSITION_WEIGHTS,
        }
    }
}

impl TypeFirstStackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position_weights(position_weights: [f64; STACK_SIZE]) -> Self {
        Self { position_weights }
    }

    /// Position-weighted dot product of the archetype's stack and the scores.
    pub fn fit(&self, archetype: &Archetype, scores: &FunctionScores) -> f64 {
        let fit: f64 = archetype
            .functions
            .iter()
            .zip(self.position_weights)
            .map(|(&function, weight)| weight * scores[function])
            .sum();
        if fit.is_finite() {
            fit
        } else {
            f64::NEG_INFINITY
        }
    }

    pub fn best_archetype(&self, scores: &FunctionScores) -> &'static Archetype {
        let archetypes = Archetype::all();
        let mut best = &archetypes[0];
        let mut best_fit = self.fit(best, scores);

        for archetype in &archetypes[1..] {
            let fit = self.fit(archetype, scores);
            if fit > best_fit {
                best = archetype;
                best_fit = fit;
            }
        }
        best
    }
}

impl StackBuildingStrategy for TypeFirstStackBuilder {
    fn name(&self) -> &'static str {
        "type-first"
    }

    fn build_stack(&self, scores: &FunctionScores) -> CognitiveStack {
        self.best_archetype(scores).stack()
    }
}
