//! Calculation configuration - preset selection and tuning overrides

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::typology::{
    DichotomyBonus, ExactTypeMatcher, FlexibleTypeMatcher, MatchWeights, ScoringWeights,
    StackAwareScoring, StrategyPreset, TheoryBasedStackBuilder, TypeCalculator,
    TypeFirstStackBuilder, UniformScoring, MATCH_POSITION_WEIGHTS, STACK_POSITION_WEIGHTS,
    STACK_SIZE,
};

/// Largest nudge a dichotomy tally may give a function score.
pub const MAX_DICHOTOMY_BONUS: f64 = 0.10;

/// Secondary functions never get more of the bonus than the primary ones.
pub const MAX_SECONDARY_FACTOR: f64 = 1.0;

/// Which preset to run and which of its constants to override.
///
/// Every override is optional; unset values keep the preset's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationConfig {
    /// Named strategy combination
    #[serde(default)]
    pub preset: StrategyPreset,

    /// Stack-aware class weight for function-preference questions
    pub preference_weight: Option<f64>,

    /// Stack-aware class weight for function-order questions
    pub order_weight: Option<f64>,

    /// Stack-aware class weight for dichotomy questions
    pub dichotomy_weight: Option<f64>,

    pub order_amplifier: Option<f64>,

    pub contrast_factor: Option<f64>,

    /// E/I dichotomy bonus (at most 0.10)
    pub ei_bonus: Option<f64>,

    /// J/P dichotomy bonus (at most 0.10)
    pub jp_bonus: Option<f64>,

    /// Share of the dichotomy bonus given to secondary functions (at most 1.0)
    pub secondary_factor: Option<f64>,

    /// Type-first fit weights, dominant to inferior
    pub stack_position_weights: Option<Vec<f64>>,

    /// Matcher points per position, dominant to inferior
    pub match_position_weights: Option<Vec<f64>>,

    /// Confidence multiplier for non-exact matches
    pub mismatch_discount: Option<f64>,
}

impl CalculationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let scalars = [
            ("preference_weight", self.preference_weight),
            ("order_weight", self.order_weight),
            ("dichotomy_weight", self.dichotomy_weight),
            ("order_amplifier", self.order_amplifier),
            ("contrast_factor", self.contrast_factor),
            ("ei_bonus", self.ei_bonus),
            ("jp_bonus", self.jp_bonus),
            ("secondary_factor", self.secondary_factor),
        ];
        for (name, value) in scalars {
            if let Some(value) = value {
                check_weight(name, value)?;
            }
        }

        for (name, value) in [("ei_bonus", self.ei_bonus), ("jp_bonus", self.jp_bonus)] {
            match value {
                Some(value) if value > MAX_DICHOTOMY_BONUS => {
                    return Err(ValidationError::BonusTooLarge {
                        name,
                        value,
                        max: MAX_DICHOTOMY_BONUS,
                    });
                }
                _ => {}
            }
        }

        if let Some(factor) = self.secondary_factor {
            if factor > MAX_SECONDARY_FACTOR {
                return Err(ValidationError::BonusTooLarge {
                    name: "secondary_factor",
                    value: factor,
                    max: MAX_SECONDARY_FACTOR,
                });
            }
        }

        if let Some(discount) = self.mismatch_discount {
            if !(discount > 0.0 && discount <= 1.0) {
                return Err(ValidationError::InvalidDiscount(discount));
            }
        }

        if let Some(weights) = &self.stack_position_weights {
            parse_position_weights("stack_position_weights", weights)?;
        }
        if let Some(weights) = &self.match_position_weights {
            parse_position_weights("match_position_weights", weights)?;
        }

        Ok(())
    }

    /// Builds the configured preset with overrides applied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any override is out of range.
    pub fn build_calculator(&self) -> Result<TypeCalculator, ValidationError> {
        self.validate()?;

        let bonus = self.dichotomy_bonus();
        let mut calculator = TypeCalculator::from_preset(self.preset);

        match self.preset {
            StrategyPreset::Baseline => {
                calculator.set_scoring(Box::new(UniformScoring::with_bonus(bonus)));
            }
            _ => {
                let mut scoring = StackAwareScoring::new()
                    .with_weights(self.scoring_weights())
                    .with_bonus(bonus);
                if let Some(amplifier) = self.order_amplifier {
                    scoring = scoring.with_order_amplifier(amplifier);
                }
                if let Some(contrast) = self.contrast_factor {
                    scoring = scoring.with_contrast_factor(contrast);
                }
                calculator.set_scoring(Box::new(scoring));
            }
        }

        match self.preset {
            StrategyPreset::TypeFirst => {
                let weights = match &self.stack_position_weights {
                    Some(weights) => parse_position_weights("stack_position_weights", weights)?,
                    None => STACK_POSITION_WEIGHTS,
                };
                calculator.set_stack_builder(Box::new(TypeFirstStackBuilder::with_position_weights(weights)));
            }
            _ => calculator.set_stack_builder(Box::new(TheoryBasedStackBuilder::new())),
        }

        let match_weights = self.match_weights()?;
        match self.preset {
            StrategyPreset::Flexible => {
                calculator.set_matcher(Box::new(FlexibleTypeMatcher::new().with_weights(match_weights)));
            }
            _ => calculator.set_matcher(Box::new(ExactTypeMatcher::with_weights(match_weights))),
        }

        Ok(calculator)
    }

    fn scoring_weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::STACK_AWARE;
        ScoringWeights {
            function_preference: self.preference_weight.unwrap_or(defaults.function_preference),
            function_order: self.order_weight.unwrap_or(defaults.function_order),
            traditional_dichotomy: self.dichotomy_weight.unwrap_or(defaults.traditional_dichotomy),
        }
    }

    fn dichotomy_bonus(&self) -> DichotomyBonus {
        let defaults = DichotomyBonus::default();
        DichotomyBonus {
            extraversion_introversion: self.ei_bonus.unwrap_or(defaults.extraversion_introversion),
            judging_perceiving: self.jp_bonus.unwrap_or(defaults.judging_perceiving),
            secondary_factor: self.secondary_factor.unwrap_or(defaults.secondary_factor),
        }
    }

    fn match_weights(&self) -> Result<MatchWeights, ValidationError> {
        let defaults = MatchWeights::default();
        let position_weights = match &self.match_position_weights {
            Some(weights) => parse_position_weights("match_position_weights", weights)?,
            None => MATCH_POSITION_WEIGHTS,
        };
        Ok(MatchWeights {
            position_weights,
            mismatch_discount: self.mismatch_discount.unwrap_or(defaults.mismatch_discount),
        })
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidWeight { name, value })
    }
}

fn parse_position_weights(name: &'static str, weights: &[f64]) -> Result<[f64; STACK_SIZE], ValidationError> {
    let count_error = ValidationError::PositionWeightCount {
        name,
        expected: STACK_SIZE,
        actual: weights.len(),
    };
    let array: [f64; STACK_SIZE] = weights.try_into().map_err(|_| count_error)?;

    for value in array {
        check_weight(name, value)?;
    }
    if array.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(ValidationError::PositionWeightsNotDecreasing(name));
    }
    Ok(array)
}
