//! Integration tests for the type calculation pipeline.
//!
//! Covers the end-to-end behaviour through the public API:
//! 1. Hand-built answer patterns land on the expected scores and types
//! 2. Every preset upholds stack, ranking and confidence guarantees
//! 3. Small answer perturbations rarely change the top type

use proptest::prelude::*;
use proptest::sample::subsequence;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

use cognitive_typology::application::{CalculateTypeCommand, CalculateTypeHandler};
use cognitive_typology::domain::foundation::ErrorCode;
use cognitive_typology::domain::typology::{
    validate_stack, Archetype, CalculationError, CognitiveFunction, DichotomyAxis, FunctionAxis,
    PersonalityType, QuestionAxis, QuestionBank, QuestionClass, Response, ScoringStrategy,
    StackAwareScoring, StrategyPreset, TypeCalculator, UniformScoring,
};
use std::sync::Arc;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Indices for one function axis, function-order questions first.
fn axis_questions(axis: FunctionAxis) -> Vec<usize> {
    let mut indices = QuestionBank::indices_by_axis(QuestionAxis::Function(axis));
    indices.sort_by_key(|&i| {
        let class = QuestionBank::get(i).map(|q| q.question_class);
        (class != Some(QuestionClass::FunctionOrder), i)
    });
    indices
}

fn dichotomy_questions(axis: DichotomyAxis) -> Vec<usize> {
    QuestionBank::indices_by_axis(QuestionAxis::Dichotomy(axis))
}

/// A respondent who leans hard on Ni, then Te, Fi and Se, and leaves the
/// remaining function questions unanswered.
fn intj_pattern() -> Vec<Response> {
    let mut responses = Vec::new();
    let mut answer = |axis: FunctionAxis, count: usize, extroverted: bool| {
        for index in axis_questions(axis).into_iter().take(count) {
            responses.push(Response::new(index, Some(extroverted)));
        }
    };
    answer(FunctionAxis::Intuition, 8, false);
    answer(FunctionAxis::Thinking, 4, true);
    answer(FunctionAxis::Feeling, 2, false);
    answer(FunctionAxis::Sensing, 1, true);

    for index in dichotomy_questions(DichotomyAxis::ExtraversionIntroversion) {
        responses.push(Response::no(index));
    }
    for index in dichotomy_questions(DichotomyAxis::JudgingPerceiving) {
        responses.push(Response::yes(index));
    }
    responses
}

fn all_true() -> Vec<Response> {
    (0..QuestionBank::len()).map(Response::yes).collect()
}

fn arb_responses() -> impl Strategy<Value = Vec<Response>> {
    prop::collection::vec(
        (0usize..QuestionBank::len() + 5, prop::option::of(any::<bool>()))
            .prop_map(|(index, value)| Response::new(index, value)),
        0..60,
    )
}

/// Only unsure answers and out-of-range indices.
fn arb_unusable_responses() -> impl Strategy<Value = Vec<Response>> {
    let len = QuestionBank::len();
    prop::collection::vec(
        prop_oneof![
            (0..len).prop_map(Response::unsure),
            (len..len + 20, any::<bool>()).prop_map(|(index, value)| Response::new(index, Some(value))),
        ],
        0..20,
    )
}

fn has_usable(responses: &[Response]) -> bool {
    responses.iter().any(Response::is_usable)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn all_true_favours_extroverted_functions() {
    let strategies: Vec<Box<dyn ScoringStrategy>> =
        vec![Box::new(UniformScoring::new()), Box::new(StackAwareScoring::new())];

    for strategy in strategies {
        let scores = strategy.score_responses(&all_true());
        for function in CognitiveFunction::ALL {
            if function.attitude().is_extroverted() {
                assert!(scores[function] > 0.0, "{} {function}", strategy.name());
            } else {
                assert!(scores[function] <= 0.0, "{} {function}", strategy.name());
            }
        }
    }
}

#[test]
fn crafted_intj_pattern_is_recognised_by_every_preset() {
    for preset in StrategyPreset::ALL {
        let result = TypeCalculator::from_preset(preset)
            .calculate(&intj_pattern())
            .unwrap();
        assert_eq!(result.personality_type, PersonalityType::INTJ, "{preset}");
        assert!(result.confidence.value() > 50, "{preset}");
    }
}

#[test]
fn crafted_intj_scores_follow_the_intended_order() {
    let scores = StackAwareScoring::new().score_responses(&intj_pattern());
    let top: Vec<_> = scores.ranked().into_iter().take(4).map(|(f, _)| f).collect();
    assert_eq!(
        top,
        vec![
            CognitiveFunction::Ni,
            CognitiveFunction::Te,
            CognitiveFunction::Fi,
            CognitiveFunction::Se
        ]
    );
}

#[test]
fn small_perturbations_keep_the_top_type() {
    const TRIALS: usize = 100;

    let base = intj_pattern();
    let calculator = TypeCalculator::from_preset(StrategyPreset::Accurate);
    let flips_per_trial = (base.len() + 5) / 10;
    let flips = subsequence((0..base.len()).collect::<Vec<_>>(), flips_per_trial);

    let mut runner = TestRunner::deterministic();
    let mut kept = 0;
    for _ in 0..TRIALS {
        let positions = flips.new_tree(&mut runner).unwrap().current();
        let mut responses = base.clone();
        for position in positions {
            let response = &mut responses[position];
            response.value = response.value.map(|value| !value);
        }

        let result = calculator.calculate(&responses).unwrap();
        if result.personality_type == PersonalityType::INTJ {
            kept += 1;
        }
    }

    assert!(kept * 10 >= TRIALS * 8, "top type kept in only {kept}/{TRIALS} trials");
}

#[test]
fn empty_and_unanswered_inputs_fail_for_every_preset() {
    let unanswered: Vec<_> = (0..QuestionBank::len()).map(Response::unsure).collect();
    for preset in StrategyPreset::ALL {
        let calculator = TypeCalculator::from_preset(preset);
        assert!(matches!(
            calculator.calculate(&[]),
            Err(CalculationError::NoValidResponses { .. })
        ));
        assert!(matches!(
            calculator.calculate(&unanswered),
            Err(CalculationError::NoValidResponses { .. })
        ));
    }
}

#[test]
fn handler_reports_missing_answers_as_domain_error() {
    let handler = CalculateTypeHandler::new(Arc::new(TypeCalculator::default()));
    let err = handler
        .handle(CalculateTypeCommand::new(vec![Response::unsure(0)]))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoValidResponses);
}

#[test]
fn switching_presets_changes_reported_strategies() {
    let mut names = std::collections::HashSet::new();
    for preset in StrategyPreset::ALL {
        let result = TypeCalculator::from_preset(preset).calculate(&all_true()).unwrap();
        names.insert((
            result.strategies.scoring,
            result.strategies.stack_building,
            result.strategies.matching,
        ));
    }
    assert_eq!(names.len(), StrategyPreset::ALL.len());
}

#[test]
fn result_round_trips_through_json() {
    let result = TypeCalculator::default().calculate(&intj_pattern()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: cognitive_typology::domain::typology::CalculationResult =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back.personality_type, result.personality_type);
    assert_eq!(back.stack, result.stack);
    assert_eq!(back.alternative_types.len(), 16);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn calculation_is_deterministic(responses in arb_responses()) {
        for preset in StrategyPreset::ALL {
            let calculator = TypeCalculator::from_preset(preset);
            prop_assert_eq!(calculator.calculate(&responses), calculator.calculate(&responses));
        }
    }

    #[test]
    fn results_are_well_formed(responses in arb_responses()) {
        prop_assume!(has_usable(&responses));

        for preset in StrategyPreset::ALL {
            let result = TypeCalculator::from_preset(preset).calculate(&responses).unwrap();

            prop_assert!(validate_stack(&result.stack));
            prop_assert!(result.confidence.value() <= 100);
            prop_assert_eq!(result.alternative_types.len(), 16);
            prop_assert_eq!(result.personality_type, result.alternative_types[0].personality_type);
            for pair in result.alternative_types.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for alternative in &result.alternative_types {
                prop_assert!(alternative.confidence.value() <= 100);
            }
        }
    }

    #[test]
    fn missing_answers_always_fail(responses in arb_unusable_responses()) {
        let result = TypeCalculator::default().calculate(&responses);
        let is_no_valid_responses = matches!(result, Err(CalculationError::NoValidResponses { .. }));
        prop_assert!(is_no_valid_responses);
    }

    #[test]
    fn type_first_returns_the_winning_canonical_stack(responses in arb_responses()) {
        prop_assume!(has_usable(&responses));

        let result = TypeCalculator::from_preset(StrategyPreset::TypeFirst)
            .calculate(&responses)
            .unwrap();
        prop_assert_eq!(result.stack, Archetype::find(result.personality_type).stack());
        prop_assert!(result.alternative_types[0].exact_match);
        prop_assert_eq!(result.confidence.value(), 100);
    }
}
