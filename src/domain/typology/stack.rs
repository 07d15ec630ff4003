//! Cognitive stack - four ordered function slots from dominant to inferior.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::function::{Attitude, CognitiveFunction};

pub const STACK_SIZE: usize = 4;

/// One position in a stack: an axis pair plus which form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CognitiveFunctionSlot {
    pub extroverted: CognitiveFunction,
    pub introverted: CognitiveFunction,
    pub is_extroverted: bool,
}

impl CognitiveFunctionSlot {
    /// Creates the slot whose active function is `function`.
    pub fn from_function(function: CognitiveFunction) -> Self {
        let axis = function.axis();
        Self {
            extroverted: axis.extroverted(),
            introverted: axis.introverted(),
            is_extroverted: function.attitude().is_extroverted(),
        }
    }

    pub fn active(&self) -> CognitiveFunction {
        if self.is_extroverted {
            self.extroverted
        } else {
            self.introverted
        }
    }

    pub fn attitude(&self) -> Attitude {
        self.active().attitude()
    }
}

/// Four slots ordered dominant, auxiliary, tertiary, inferior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CognitiveStack([CognitiveFunctionSlot; STACK_SIZE]);

impl CognitiveStack {
    pub fn new(slots: [CognitiveFunctionSlot; STACK_SIZE]) -> Self {
        Self(slots)
    }

    pub fn from_functions(functions: [CognitiveFunction; STACK_SIZE]) -> Self {
        Self(functions.map(CognitiveFunctionSlot::from_function))
    }

    pub fn slots(&self) -> &[CognitiveFunctionSlot; STACK_SIZE] {
        &self.0
    }

    pub fn functions(&self) -> [CognitiveFunction; STACK_SIZE] {
        self.0.map(|slot| slot.active())
    }

    pub fn dominant(&self) -> CognitiveFunction {
        self.0[0].active()
    }

    /// Position of `function` in this stack, if present.
    pub fn position_of(&self, function: CognitiveFunction) -> Option<usize> {
        self.0.iter().position(|slot| slot.active() == function)
    }

    pub fn is_valid(&self) -> bool {
        validate_stack(self)
    }
}

impl fmt::Display for CognitiveStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.0.iter().map(|slot| slot.active().code()).collect();
        write!(f, "{}", codes.join("-"))
    }
}

/// Checks that all active functions are distinct and that attitude alternates
/// at every adjacent pair starting from the dominant.
pub fn validate_stack(stack: &CognitiveStack) -> bool {
    let functions = stack.functions();

    let distinct = functions
        .iter()
        .enumerate()
        .all(|(i, f)| !functions[..i].contains(f));

    let alternates = stack
        .slots()
        .windows(2)
        .all(|pair| pair[0].is_extroverted != pair[1].is_extroverted);

    distinct && alternates
}
