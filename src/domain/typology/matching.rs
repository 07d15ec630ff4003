//! Type matching strategies - rank all 16 archetypes against a built stack.
//!
//! # Confidence
//!
//! `confidence = round(score / max_score × 100)`, capped to 0-100, then
//! multiplied by the mismatch discount (0.8) whenever the built stack is not a
//! position-for-position match for that archetype.
//!
//! # Ordering
//!
//! Results are sorted by score, highest first. Equal scores are ordered by how
//! many of the archetype's E/I and J/P letters agree with the respondent's
//! dichotomy answers, then by archetype table order.

use serde::{Deserialize, Serialize};

use super::archetype::{Archetype, PersonalityType};
use super::question::DichotomyAxis;
use super::response::{DichotomyTally, Lean, Response};
use super::stack::{CognitiveStack, STACK_SIZE};
use crate::domain::foundation::Confidence;

/// Points for a match at each stack position.
pub const MATCH_POSITION_WEIGHTS: [f64; STACK_SIZE] = [40.0, 30.0, 20.0, 10.0];
/// Confidence multiplier for archetypes the stack does not match exactly.
pub const MISMATCH_DISCOUNT: f64 = 0.8;
/// Share of a position's points lost per step of positional distance.
pub const DISTANCE_PENALTY: f64 = 0.35;

/// One archetype's standing against a built stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMatchResult {
    pub personality_type: PersonalityType,
    pub score: f64,
    pub confidence: Confidence,
    /// The archetype's canonical stack.
    pub stack: CognitiveStack,
    /// True when the built stack equals the canonical stack position for position.
    pub exact_match: bool,
}

/// Scores every archetype against a stack.
pub trait TypeMatchingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns one result per archetype, sorted by score (highest first).
    fn find_best_matches(&self, stack: &CognitiveStack, responses: &[Response]) -> Vec<TypeMatchResult>;
}

/// Tunables shared by the matchers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub position_weights: [f64; STACK_SIZE],
    pub mismatch_discount: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            position_weights: MATCH_POSITION_WEIGHTS,
            mismatch_discount: MISMATCH_DISCOUNT,
        }
    }
}

impl MatchWeights {
    fn max_score(&self) -> f64 {
        self.position_weights.iter().sum()
    }

    fn confidence(&self, score: f64, exact_match: bool) -> Confidence {
        let max = self.max_score();
        let base = if max > 0.0 {
            Confidence::from_ratio(score / max)
        } else {
            Confidence::ZERO
        };
        if exact_match {
            base
        } else {
            base.discounted(self.mismatch_discount)
        }
    }

    /// Builds, orders and returns the results for every archetype.
    fn rank(
        &self,
        stack: &CognitiveStack,
        responses: &[Response],
        score_of: impl Fn(&Archetype) -> f64,
    ) -> Vec<TypeMatchResult> {
        let tally = DichotomyTally::from_responses(responses, 1.0);

        let mut ranked: Vec<(TypeMatchResult, usize)> = Archetype::all()
            .iter()
            .map(|archetype| {
                let score = score_of(archetype);
                let exact_match = stack.functions() == archetype.functions;
                let result = TypeMatchResult {
                    personality_type: archetype.personality_type,
                    score,
                    confidence: self.confidence(score, exact_match),
                    stack: archetype.stack(),
                    exact_match,
                };
                (result, dichotomy_agreement(archetype.personality_type, &tally))
            })
            .collect();

        ranked.sort_by(|(a, a_agree), (b, b_agree)| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b_agree.cmp(a_agree))
                .then_with(|| a.personality_type.cmp(&b.personality_type))
        });

        ranked.into_iter().map(|(result, _)| result).collect()
    }
}

/// Number of the type's E/I and J/P letters that the respondent leans toward.
fn dichotomy_agreement(personality_type: PersonalityType, tally: &DichotomyTally) -> usize {
    let agrees = |axis: DichotomyAxis, type_takes_first: bool| match tally.lean(axis) {
        Lean::First => type_takes_first,
        Lean::Second => !type_takes_first,
        Lean::Balanced => false,
    };

    [
        agrees(DichotomyAxis::ExtraversionIntroversion, personality_type.is_extraverted()),
        agrees(DichotomyAxis::JudgingPerceiving, personality_type.is_judging()),
    ]
    .iter()
    .filter(|&&agree| agree)
    .count()
}

/// Awards a position's points only when the stack and the archetype hold the
/// same function there.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTypeMatcher {
    weights: MatchWeights,
}

impl ExactTypeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, stack: &CognitiveStack, archetype: &Archetype) -> f64 {
        stack
            .functions()
            .iter()
            .zip(archetype.functions.iter())
            .zip(self.weights.position_weights)
            .filter(|((built, canonical), _)| built == canonical)
            .map(|(_, weight)| weight)
            .sum()
    }
}

impl TypeMatchingStrategy for ExactTypeMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn find_best_matches(&self, stack: &CognitiveStack, responses: &[Response]) -> Vec<TypeMatchResult> {
        self.weights
            .rank(stack, responses, |archetype| self.score(stack, archetype))
    }
}

/// Rewards functions the archetype shares with the stack even when they sit at
/// a different position, losing [`DISTANCE_PENALTY`] of the points per step.
#[derive(Debug, Clone, Copy)]
pub struct FlexibleTypeMatcher {
    weights: MatchWeights,
    distance_penalty: f64,
}

impl Default for FlexibleTypeMatcher {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            distance_penalty: DISTANCE_PENALTY,
        }
    }
}

impl FlexibleTypeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_distance_penalty(mut self, distance_penalty: f64) -> Self {
        self.distance_penalty = distance_penalty;
        self
    }

    pub fn score(&self, stack: &CognitiveStack, archetype: &Archetype) -> f64 {
        stack
            .functions()
            .iter()
            .enumerate()
            .filter_map(|(position, &function)| {
                let canonical = archetype.position_of(function)?;
                let distance = position.abs_diff(canonical) as f64;
                let closeness = (1.0 - self.distance_penalty * distance).max(0.0);
                Some(self.weights.position_weights[position] * closeness)
            })
            .sum()
    }
}

impl TypeMatchingStrategy for FlexibleTypeMatcher {
    fn name(&self) -> &'static str {
        "flexible"
    }

    fn find_best_matches(&self, stack: &CognitiveStack, responses: &[Response]) -> Vec<TypeMatchResult> {
        self.weights
            .rank(stack, responses, |archetype| self.score(stack, archetype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::typology::function::CognitiveFunction::*;
    use crate::domain::typology::question::{QuestionAxis, QuestionBank};

    fn intj_stack() -> CognitiveStack {
        CognitiveStack::from_functions([Ni, Te, Fi, Se])
    }

    fn matchers() -> Vec<Box<dyn TypeMatchingStrategy>> {
        vec![Box::new(ExactTypeMatcher::new()), Box::new(FlexibleTypeMatcher::new())]
    }

    #[test]
    fn every_matcher_returns_all_sixteen_sorted() {
        for matcher in matchers() {
            let results = matcher.find_best_matches(&intj_stack(), &[]);
            assert_eq!(results.len(), 16, "{}", matcher.name());
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn exact_stack_gets_full_score_and_confidence() {
        for matcher in matchers() {
            let top = &matcher.find_best_matches(&intj_stack(), &[])[0];
            assert_eq!(top.personality_type, PersonalityType::INTJ);
            assert_eq!(top.score, 100.0);
            assert_eq!(top.confidence, Confidence::FULL);
            assert!(top.exact_match);
        }
    }

    #[test]
    fn exact_matcher_awards_positional_weights() {
        let matcher = ExactTypeMatcher::new();
        // INFJ shares dominant and inferior with INTJ: 40 + 10
        let score = matcher.score(&intj_stack(), PersonalityType::INFJ.archetype());
        assert_eq!(score, 50.0);
    }

    #[test]
    fn flexible_matcher_rewards_nearby_positions() {
        let matcher = FlexibleTypeMatcher::new();
        // ENTJ is Te-Ni-Se-Fi: every function one step away
        let score = matcher.score(&intj_stack(), PersonalityType::ENTJ.archetype());
        let expected = 100.0 * (1.0 - DISTANCE_PENALTY);
        assert!((score - expected).abs() < 1e-9);
        assert_eq!(ExactTypeMatcher::new().score(&intj_stack(), PersonalityType::ENTJ.archetype()), 0.0);
    }

    #[test]
    fn mismatches_are_discounted() {
        let results = ExactTypeMatcher::new().find_best_matches(&intj_stack(), &[]);
        let infj = results
            .iter()
            .find(|r| r.personality_type == PersonalityType::INFJ)
            .unwrap();
        assert!(!infj.exact_match);
        assert_eq!(infj.confidence.value(), 40);
    }

    #[test]
    fn non_canonical_stack_never_reaches_full_confidence() {
        // Valid alternation but not one of the 16 canonical stacks
        let stack = CognitiveStack::from_functions([Ne, Ti, Te, Si]);
        for matcher in matchers() {
            for result in matcher.find_best_matches(&stack, &[]) {
                assert!(!result.exact_match);
                assert!(result.confidence.value() <= 80);
            }
        }
    }

    #[test]
    fn ties_prefer_dichotomy_agreement() {
        // ENTJ, ENTP, ENFJ and ENFP all score 50 against this stack
        let stack = CognitiveStack::from_functions([Ne, Ni, Se, Si]);
        let top_four = |responses: &[Response]| -> Vec<PersonalityType> {
            let results = ExactTypeMatcher::new().find_best_matches(&stack, responses);
            assert!(results[..4].iter().all(|r| r.score == 50.0));
            results[..4].iter().map(|r| r.personality_type).collect()
        };

        use PersonalityType::*;
        assert_eq!(top_four(&[]), vec![ENTJ, ENTP, ENFJ, ENFP]);

        let jp = QuestionBank::indices_by_axis(QuestionAxis::Dichotomy(DichotomyAxis::JudgingPerceiving));
        let perceiving: Vec<_> = jp.iter().map(|&i| Response::no(i)).collect();
        assert_eq!(top_four(&perceiving), vec![ENTP, ENFP, ENTJ, ENFJ]);

        let judging: Vec<_> = jp.iter().map(|&i| Response::yes(i)).collect();
        assert_eq!(top_four(&judging), vec![ENTJ, ENFJ, ENTP, ENFP]);
    }

    #[test]
    fn confidences_stay_in_bounds() {
        let stacks = [
            intj_stack(),
            CognitiveStack::from_functions([Ne, Ti, Te, Si]),
            CognitiveStack::from_functions([Se, Fi, Te, Ni]),
        ];
        for matcher in matchers() {
            for stack in &stacks {
                for result in matcher.find_best_matches(stack, &[]) {
                    assert!(result.confidence.value() <= 100);
                    assert!(result.score >= 0.0);
                }
            }
        }
    }
}
