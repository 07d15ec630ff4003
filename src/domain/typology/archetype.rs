//! The 16 canonical archetypes and their theory-correct function stacks.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::function::CognitiveFunction::{self, *};
use super::stack::{CognitiveStack, STACK_SIZE};
use crate::domain::foundation::ValidationError;

/// Four-letter personality type code.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl PersonalityType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::INTJ => "INTJ",
            Self::INTP => "INTP",
            Self::ENTJ => "ENTJ",
            Self::ENTP => "ENTP",
            Self::INFJ => "INFJ",
            Self::INFP => "INFP",
            Self::ENFJ => "ENFJ",
            Self::ENFP => "ENFP",
            Self::ISTJ => "ISTJ",
            Self::ISFJ => "ISFJ",
            Self::ESTJ => "ESTJ",
            Self::ESFJ => "ESFJ",
            Self::ISTP => "ISTP",
            Self::ISFP => "ISFP",
            Self::ESTP => "ESTP",
            Self::ESFP => "ESFP",
        }
    }

    pub fn is_extraverted(&self) -> bool {
        self.code().starts_with('E')
    }

    pub fn is_judging(&self) -> bool {
        self.code().ends_with('J')
    }

    pub fn archetype(&self) -> &'static Archetype {
        // ARCHETYPES lists every variant in declaration order
        &ARCHETYPES[*self as usize]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("personality_type"));
        }
        BY_CODE
            .get(code.as_str())
            .map(|archetype| archetype.personality_type)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "personality_type",
                    format!("'{}' is not one of the 16 type codes", s.trim()),
                )
            })
    }
}

/// A canonical type: its code, canonical stack and descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub personality_type: PersonalityType,
    pub nickname: &'static str,
    pub description: &'static str,
    pub functions: [CognitiveFunction; STACK_SIZE],
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &ARCHETYPES
    }

    pub fn find(personality_type: PersonalityType) -> &'static Archetype {
        personality_type.archetype()
    }

    pub fn stack(&self) -> CognitiveStack {
        CognitiveStack::from_functions(self.functions)
    }

    pub fn position_of(&self, function: CognitiveFunction) -> Option<usize> {
        self.functions.iter().position(|&f| f == function)
    }
}

const fn archetype(
    personality_type: PersonalityType,
    nickname: &'static str,
    description: &'static str,
    functions: [CognitiveFunction; STACK_SIZE],
) -> Archetype {
    Archetype {
        personality_type,
        nickname,
        description,
        functions,
    }
}

pub const ARCHETYPES: [Archetype; 16] = [
    archetype(
        PersonalityType::INTJ,
        "Architect",
        "Strategic long-range planner who turns insight into systems.",
        [Ni, Te, Fi, Se],
    ),
    archetype(
        PersonalityType::INTP,
        "Logician",
        "Analytical theorist driven to understand how everything works.",
        [Ti, Ne, Si, Fe],
    ),
    archetype(
        PersonalityType::ENTJ,
        "Commander",
        "Decisive organizer who mobilizes people toward ambitious goals.",
        [Te, Ni, Se, Fi],
    ),
    archetype(
        PersonalityType::ENTP,
        "Debater",
        "Inventive challenger who thrives on ideas and argument.",
        [Ne, Ti, Fe, Si],
    ),
    archetype(
        PersonalityType::INFJ,
        "Advocate",
        "Quiet visionary guided by deep insight into people.",
        [Ni, Fe, Ti, Se],
    ),
    archetype(
        PersonalityType::INFP,
        "Mediator",
        "Idealist who lives by a strong inner value system.",
        [Fi, Ne, Si, Te],
    ),
    archetype(
        PersonalityType::ENFJ,
        "Protagonist",
        "Charismatic mentor who brings out the best in others.",
        [Fe, Ni, Se, Ti],
    ),
    archetype(
        PersonalityType::ENFP,
        "Campaigner",
        "Enthusiastic explorer of possibilities and people.",
        [Ne, Fi, Te, Si],
    ),
    archetype(
        PersonalityType::ISTJ,
        "Logistician",
        "Dependable guardian of proven methods and commitments.",
        [Si, Te, Fi, Ne],
    ),
    archetype(
        PersonalityType::ISFJ,
        "Defender",
        "Warm protector who remembers and meets others' needs.",
        [Si, Fe, Ti, Ne],
    ),
    archetype(
        PersonalityType::ESTJ,
        "Executive",
        "Practical administrator who keeps order and standards.",
        [Te, Si, Ne, Fi],
    ),
    archetype(
        PersonalityType::ESFJ,
        "Consul",
        "Sociable caretaker attentive to community and tradition.",
        [Fe, Si, Ne, Ti],
    ),
    archetype(
        PersonalityType::ISTP,
        "Virtuoso",
        "Hands-on troubleshooter with a cool, logical eye.",
        [Ti, Se, Ni, Fe],
    ),
    archetype(
        PersonalityType::ISFP,
        "Adventurer",
        "Gentle artist who experiences life through the senses.",
        [Fi, Se, Ni, Te],
    ),
    archetype(
        PersonalityType::ESTP,
        "Entrepreneur",
        "Energetic realist who acts decisively in the moment.",
        [Se, Ti, Fe, Ni],
    ),
    archetype(
        PersonalityType::ESFP,
        "Entertainer",
        "Spontaneous performer who lights up every room.",
        [Se, Fi, Te, Ni],
    ),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Archetype>> = Lazy::new(|| {
    ARCHETYPES
        .iter()
        .map(|archetype| (archetype.personality_type.code(), archetype))
        .collect()
});
