//! Responses to the question bank and the E/I, J/P dichotomy tallies.

use serde::{Deserialize, Serialize};

use super::question::{DichotomyAxis, Question, QuestionAxis, QuestionBank};

/// One answer. `Some(true)` picks the first option, `Some(false)` the second,
/// `None` means unsure or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    pub question_index: usize,
    #[serde(default)]
    pub value: Option<bool>,
}

impl Response {
    pub fn new(question_index: usize, value: Option<bool>) -> Self {
        Self {
            question_index,
            value,
        }
    }

    pub fn yes(question_index: usize) -> Self {
        Self::new(question_index, Some(true))
    }

    pub fn no(question_index: usize) -> Self {
        Self::new(question_index, Some(false))
    }

    pub fn unsure(question_index: usize) -> Self {
        Self::new(question_index, None)
    }

    /// The question this response answers, if the index is in range.
    pub fn question(&self) -> Option<&'static Question> {
        QuestionBank::get(self.question_index)
    }

    /// True when the response carries an answer to a question that exists.
    pub fn is_usable(&self) -> bool {
        self.value.is_some() && self.question().is_some()
    }
}

/// Keeps only answered responses whose index refers to a real question.
pub fn usable_responses(responses: &[Response]) -> Vec<Response> {
    responses.iter().copied().filter(Response::is_usable).collect()
}

/// Leaning on one of the two traditional dichotomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lean {
    First,
    Second,
    Balanced,
}

/// Weighted tallies of the two traditional dichotomies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DichotomyTally {
    pub extraversion: f64,
    pub introversion: f64,
    pub judging: f64,
    pub perceiving: f64,
}

impl DichotomyTally {
    /// Tallies every usable dichotomy answer with the given weight.
    pub fn from_responses(responses: &[Response], weight: f64) -> Self {
        let mut tally = Self::default();
        for response in responses {
            if let (Some(question), Some(value)) = (response.question(), response.value) {
                if let QuestionAxis::Dichotomy(axis) = question.axis {
                    tally.record(axis, value, weight);
                }
            }
        }
        tally
    }

    pub fn record(&mut self, axis: DichotomyAxis, first_option: bool, weight: f64) {
        let slot = match (axis, first_option) {
            (DichotomyAxis::ExtraversionIntroversion, true) => &mut self.extraversion,
            (DichotomyAxis::ExtraversionIntroversion, false) => &mut self.introversion,
            (DichotomyAxis::JudgingPerceiving, true) => &mut self.judging,
            (DichotomyAxis::JudgingPerceiving, false) => &mut self.perceiving,
        };
        *slot += weight;
    }

    pub fn lean(&self, axis: DichotomyAxis) -> Lean {
        let (first, second) = self.pair(axis);
        if first > second {
            Lean::First
        } else if second > first {
            Lean::Second
        } else {
            Lean::Balanced
        }
    }

    /// How one-sided the axis is: `|a - b| / (a + b)`, 0.0 when nothing was tallied.
    pub fn strength(&self, axis: DichotomyAxis) -> f64 {
        let (first, second) = self.pair(axis);
        let total = first + second;
        if total <= 0.0 {
            return 0.0;
        }
        ((first - second).abs() / total).clamp(0.0, 1.0)
    }

    fn pair(&self, axis: DichotomyAxis) -> (f64, f64) {
        match axis {
            DichotomyAxis::ExtraversionIntroversion => (self.extraversion, self.introversion),
            DichotomyAxis::JudgingPerceiving => (self.judging, self.perceiving),
        }
    }
}
