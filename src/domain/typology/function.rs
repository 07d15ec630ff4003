//! Cognitive functions, their attitudes and categories, and per-function scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Whether a function is directed outward or inward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    Extroverted,
    Introverted,
}

impl Attitude {
    pub fn opposite(self) -> Self {
        match self {
            Self::Extroverted => Self::Introverted,
            Self::Introverted => Self::Extroverted,
        }
    }

    pub fn is_extroverted(self) -> bool {
        matches!(self, Self::Extroverted)
    }
}

/// Perceiving functions take in information; judging functions decide on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionCategory {
    Perceiving,
    Judging,
}

impl FunctionCategory {
    pub fn opposite(self) -> Self {
        match self {
            Self::Perceiving => Self::Judging,
            Self::Judging => Self::Perceiving,
        }
    }
}

/// The four function axes; each pairs an extroverted and an introverted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionAxis {
    Intuition,
    Sensing,
    Thinking,
    Feeling,
}

impl FunctionAxis {
    pub const ALL: [FunctionAxis; 4] = [
        FunctionAxis::Intuition,
        FunctionAxis::Sensing,
        FunctionAxis::Thinking,
        FunctionAxis::Feeling,
    ];

    pub fn category(self) -> FunctionCategory {
        match self {
            Self::Intuition | Self::Sensing => FunctionCategory::Perceiving,
            Self::Thinking | Self::Feeling => FunctionCategory::Judging,
        }
    }

    /// The function this axis takes in the given attitude.
    pub fn function(self, attitude: Attitude) -> CognitiveFunction {
        use CognitiveFunction::*;
        match (self, attitude) {
            (Self::Intuition, Attitude::Extroverted) => Ne,
            (Self::Intuition, Attitude::Introverted) => Ni,
            (Self::Sensing, Attitude::Extroverted) => Se,
            (Self::Sensing, Attitude::Introverted) => Si,
            (Self::Thinking, Attitude::Extroverted) => Te,
            (Self::Thinking, Attitude::Introverted) => Ti,
            (Self::Feeling, Attitude::Extroverted) => Fe,
            (Self::Feeling, Attitude::Introverted) => Fi,
        }
    }

    pub fn extroverted(self) -> CognitiveFunction {
        self.function(Attitude::Extroverted)
    }

    pub fn introverted(self) -> CognitiveFunction {
        self.function(Attitude::Introverted)
    }
}

/// One of the eight cognitive functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CognitiveFunction {
    Ne,
    Ni,
    Se,
    Si,
    Te,
    Ti,
    Fe,
    Fi,
}

impl CognitiveFunction {
    /// Fixed order used whenever scores tie.
    pub const ALL: [CognitiveFunction; 8] = [
        CognitiveFunction::Ne,
        CognitiveFunction::Ni,
        CognitiveFunction::Se,
        CognitiveFunction::Si,
        CognitiveFunction::Te,
        CognitiveFunction::Ti,
        CognitiveFunction::Fe,
        CognitiveFunction::Fi,
    ];

    pub fn axis(self) -> FunctionAxis {
        match self {
            Self::Ne | Self::Ni => FunctionAxis::Intuition,
            Self::Se | Self::Si => FunctionAxis::Sensing,
            Self::Te | Self::Ti => FunctionAxis::Thinking,
            Self::Fe | Self::Fi => FunctionAxis::Feeling,
        }
    }

    pub fn attitude(self) -> Attitude {
        match self {
            Self::Ne | Self::Se | Self::Te | Self::Fe => Attitude::Extroverted,
            Self::Ni | Self::Si | Self::Ti | Self::Fi => Attitude::Introverted,
        }
    }

    pub fn category(self) -> FunctionCategory {
        self.axis().category()
    }

    /// The same axis in the other attitude (Ne <-> Ni).
    pub fn counterpart(self) -> Self {
        self.axis().function(self.attitude().opposite())
    }

    /// Position in [`CognitiveFunction::ALL`], used for deterministic tie-breaks.
    pub fn order_index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ne => "Ne",
            Self::Ni => "Ni",
            Self::Se => "Se",
            Self::Si => "Si",
            Self::Te => "Te",
            Self::Ti => "Ti",
            Self::Fe => "Fe",
            Self::Fi => "Fi",
        }
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Signed strength for each of the eight functions.
///
/// Serializes as a map keyed by function code (`{"Ne": 3.5, ...}`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionScores {
    #[serde(rename = "Ne")]
    ne: f64,
    #[serde(rename = "Ni")]
    ni: f64,
    #[serde(rename = "Se")]
    se: f64,
    #[serde(rename = "Si")]
    si: f64,
    #[serde(rename = "Te")]
    te: f64,
    #[serde(rename = "Ti")]
    ti: f64,
    #[serde(rename = "Fe")]
    fe: f64,
    #[serde(rename = "Fi")]
    fi: f64,
}

impl FunctionScores {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds scores from `(function, score)` pairs; unlisted functions stay at zero.
    pub fn from_pairs(pairs: &[(CognitiveFunction, f64)]) -> Self {
        let mut scores = Self::zero();
        for &(function, value) in pairs {
            scores[function] = value;
        }
        scores
    }

    pub fn get(&self, function: CognitiveFunction) -> f64 {
        self[function]
    }

    pub fn add(&mut self, function: CognitiveFunction, amount: f64) {
        self[function] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (CognitiveFunction, f64)> + '_ {
        CognitiveFunction::ALL.iter().map(move |&f| (f, self[f]))
    }

    /// All functions ordered by score (highest first), ties broken by
    /// [`CognitiveFunction::ALL`] order. Non-finite scores sink to the bottom.
    pub fn ranked(&self) -> Vec<(CognitiveFunction, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(fa, a), (fb, b)| {
            rank_key(*b)
                .total_cmp(&rank_key(*a))
                .then_with(|| fa.order_index().cmp(&fb.order_index()))
        });
        ranked
    }
}

fn rank_key(score: f64) -> f64 {
    if score.is_finite() {
        score
    } else {
        f64::NEG_INFINITY
    }
}

impl Index<CognitiveFunction> for FunctionScores {
    type Output = f64;

    fn index(&self, function: CognitiveFunction) -> &f64 {
        match function {
            CognitiveFunction::Ne => &self.ne,
            CognitiveFunction::Ni => &self.ni,
            CognitiveFunction::Se => &self.se,
            CognitiveFunction::Si => &self.si,
            CognitiveFunction::Te => &self.te,
            CognitiveFunction::Ti => &self.ti,
            CognitiveFunction::Fe => &self.fe,
            CognitiveFunction::Fi => &self.fi,
        }
    }
}

impl IndexMut<CognitiveFunction> for FunctionScores {
    fn index_mut(&mut self, function: CognitiveFunction) -> &mut f64 {
        match function {
            CognitiveFunction::Ne => &mut self.ne,
            CognitiveFunction::Ni => &mut self.ni,
            CognitiveFunction::Se => &mut self.se,
            CognitiveFunction::Si => &mut self.si,
            CognitiveFunction::Te => &mut self.te,
            CognitiveFunction::Ti => &mut self.ti,
            CognitiveFunction::Fe => &mut self.fe,
            CognitiveFunction::Fi => &mut self.fi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CognitiveFunction::*;

    #[test]
    fn axis_and_attitude_round_trip_every_function() {
        for function in CognitiveFunction::ALL {
            assert_eq!(function.axis().function(function.attitude()), function);
        }
    }

    #[test]
    fn counterpart_swaps_attitude_on_same_axis() {
        assert_eq!(Ne.counterpart(), Ni);
        assert_eq!(Fi.counterpart(), Fe);
        assert_eq!(Ti.counterpart().attitude(), Attitude::Extroverted);
    }

    #[test]
    fn categories_split_perceiving_and_judging() {
        assert_eq!(Ni.category(), FunctionCategory::Perceiving);
        assert_eq!(Se.category(), FunctionCategory::Perceiving);
        assert_eq!(Te.category(), FunctionCategory::Judging);
        assert_eq!(Fi.category(), FunctionCategory::Judging);
    }

    #[test]
    fn order_index_matches_all_order() {
        for (i, function) in CognitiveFunction::ALL.iter().enumerate() {
            assert_eq!(function.order_index(), i);
        }
    }

    #[test]
    fn ranked_orders_by_score_then_fixed_order() {
        let scores = FunctionScores::from_pairs(&[(Fi, 2.0), (Te, 2.0), (Ni, 5.0)]);
        let order: Vec<_> = scores.ranked().into_iter().map(|(f, _)| f).collect();
        assert_eq!(order[..3], [Ni, Te, Fi]);
        // remaining zeros keep the fixed order
        assert_eq!(order[3..], [Ne, Se, Si, Ti, Fe]);
    }

    #[test]
    fn ranked_sinks_non_finite_scores() {
        let scores = FunctionScores::from_pairs(&[(Ne, f64::NAN), (Si, -1.0)]);
        let order: Vec<_> = scores.ranked().into_iter().map(|(f, _)| f).collect();
        assert_eq!(order.last(), Some(&Ne));
        assert_eq!(order[order.len() - 2], Si);
    }

    #[test]
    fn scores_serialize_with_function_codes() {
        let scores = FunctionScores::from_pairs(&[(Te, 1.5)]);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["Te"], 1.5);
        assert_eq!(json["Fi"], 0.0);
    }
}
