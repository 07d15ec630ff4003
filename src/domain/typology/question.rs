//! Question Bank - the fixed, ordered set of forced-choice statements.
//!
//! A question's index in [`QUESTION_BANK`] is its identity; responses refer to
//! questions only by that index.
//!
//! Every question offers two options. The first option
//! (`option_extroverted`) is selected by a `true` answer, the second
//! (`option_introverted`) by `false`. For function axes the options map to the
//! extroverted and introverted form of the axis; for the Judging/Perceiving
//! dichotomy the first option is Judging.

use serde::Serialize;

use self::DichotomyAxis::{ExtraversionIntroversion as EI, JudgingPerceiving as JP};
use super::function::FunctionAxis;
use super::function::FunctionAxis::{Feeling, Intuition, Sensing, Thinking};

/// The two traditional dichotomies that do not map onto a single function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DichotomyAxis {
    ExtraversionIntroversion,
    JudgingPerceiving,
}

/// What a question measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "axis")]
pub enum QuestionAxis {
    Function(FunctionAxis),
    Dichotomy(DichotomyAxis),
}

/// How a question is weighted during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionClass {
    /// Which form of a function the respondent prefers.
    FunctionPreference,
    /// Which form of a function the respondent reaches for first.
    FunctionOrder,
    /// Classic E/I or J/P dichotomy.
    TraditionalDichotomy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub option_extroverted: &'static str,
    pub option_introverted: &'static str,
    pub axis: QuestionAxis,
    pub question_class: QuestionClass,
}

const fn preference(
    axis: FunctionAxis,
    text: &'static str,
    option_extroverted: &'static str,
    option_introverted: &'static str,
) -> Question {
    Question {
        text,
        option_extroverted,
        option_introverted,
        axis: QuestionAxis::Function(axis),
        question_class: QuestionClass::FunctionPreference,
    }
}

const fn order(
    axis: FunctionAxis,
    text: &'static str,
    option_extroverted: &'static str,
    option_introverted: &'static str,
) -> Question {
    Question {
        text,
        option_extroverted,
        option_introverted,
        axis: QuestionAxis::Function(axis),
        question_class: QuestionClass::FunctionOrder,
    }
}

const fn dichotomy(
    axis: DichotomyAxis,
    text: &'static str,
    first: &'static str,
    second: &'static str,
) -> Question {
    Question {
        text,
        option_extroverted: first,
        option_introverted: second,
        axis: QuestionAxis::Dichotomy(axis),
        question_class: QuestionClass::TraditionalDichotomy,
    }
}

pub const QUESTION_BANK: [Question; 40] = [
    preference(
        Intuition,
        "When a new idea catches your interest, you tend to...",
        "Branch out into many possibilities at once",
        "Follow it inward toward one underlying insight",
    ),
    preference(
        Sensing,
        "On a free afternoon you would rather...",
        "Go somewhere lively and take in everything happening",
        "Return to a familiar, comfortable routine",
    ),
    preference(
        Thinking,
        "When a task is messy, your instinct is to...",
        "Organize people and resources to get it done efficiently",
        "Work out privately how the parts fit together logically",
    ),
    preference(
        Feeling,
        "In a disagreement you care most about...",
        "Restoring harmony in the group",
        "Staying true to your own values",
    ),
    dichotomy(
        EI,
        "After a long week you recharge by...",
        "Going out with friends",
        "Spending quiet time alone",
    ),
    preference(
        Intuition,
        "In conversation you are more likely to...",
        "Jump between connections and tangents",
        "Circle back to the deeper meaning behind things",
    ),
    preference(
        Sensing,
        "You trust most what...",
        "You can see and touch right now",
        "Has proven reliable in your past experience",
    ),
    preference(
        Thinking,
        "A good decision is one that...",
        "Delivers measurable results",
        "Is internally consistent and precise",
    ),
    preference(
        Feeling,
        "You judge a choice mainly by...",
        "How it affects the people around you",
        "Whether it feels authentic to who you are",
    ),
    dichotomy(
        JP,
        "You prefer your plans to be...",
        "Settled and scheduled",
        "Open and adaptable",
    ),
    order(
        Intuition,
        "Faced with a problem, the first thing you do is...",
        "Brainstorm every way it could go",
        "Wait for a clear sense of where it is heading",
    ),
    order(
        Sensing,
        "In an unfamiliar place, the first thing you do is...",
        "Dive in and react to what you find",
        "Compare it against places you already know",
    ),
    preference(
        Intuition,
        "You find it more natural to...",
        "Imagine what could be",
        "Foresee what will be",
    ),
    preference(
        Sensing,
        "When learning a skill you prefer...",
        "Trying it hands-on immediately",
        "Following a step-by-step method you can repeat",
    ),
    dichotomy(
        EI,
        "In groups you usually...",
        "Speak up and think out loud",
        "Listen first and speak once you have thought it through",
    ),
    preference(
        Thinking,
        "When someone presents an argument you...",
        "Check whether it works in practice",
        "Check whether it holds together in principle",
    ),
    preference(
        Feeling,
        "When a friend is upset you...",
        "Read the room and help everyone feel included",
        "Quietly empathize based on your own experience",
    ),
    order(
        Thinking,
        "When a decision is needed, you first reach for...",
        "Objective criteria and a plan of action",
        "Your own model of how things really work",
    ),
    order(
        Feeling,
        "When a decision is needed, you first reach for...",
        "What others will need and expect",
        "What matters deeply to you personally",
    ),
    dichotomy(
        JP,
        "Deadlines make you...",
        "Finish early to have it done",
        "Work best with a last-minute rush",
    ),
    preference(
        Intuition,
        "Patterns you notice tend to be...",
        "Links between unrelated ideas",
        "Hidden trends that predict the future",
    ),
    preference(
        Sensing,
        "You are more tuned in to...",
        "Sights, sounds and sensations around you",
        "Your body's internal state and memories",
    ),
    preference(
        Thinking,
        "At work you value...",
        "Clear goals and accountability",
        "Autonomy to analyze problems deeply",
    ),
    preference(
        Feeling,
        "Your moral compass comes mostly from...",
        "Shared social norms",
        "A private sense of right and wrong",
    ),
    dichotomy(
        EI,
        "Meeting new people is...",
        "Energizing",
        "Draining after a while",
    ),
    preference(
        Intuition,
        "When reading a story you enjoy...",
        "Exploring all the what-ifs",
        "Grasping the symbolism behind it",
    ),
    preference(
        Sensing,
        "You prefer experiences that are...",
        "New and thrilling",
        "Familiar and comforting",
    ),
    order(
        Intuition,
        "When something is unclear, you rely first on...",
        "Generating alternatives",
        "A single strong hunch",
    ),
    order(
        Sensing,
        "When something is unclear, you rely first on...",
        "Checking what is in front of you",
        "Remembering what happened last time",
    ),
    dichotomy(
        JP,
        "Your workspace is usually...",
        "Tidy and organized",
        "Flexible and a bit chaotic",
    ),
    preference(
        Thinking,
        "You prefer explanations that are...",
        "Practical and to the point",
        "Thorough and logically airtight",
    ),
    preference(
        Feeling,
        "You show care by...",
        "Making sure everyone is comfortable",
        "Being deeply loyal to a few people",
    ),
    dichotomy(
        EI,
        "At a party you...",
        "Mingle with many people",
        "Talk at length with one or two",
    ),
    preference(
        Intuition,
        "You get bored when...",
        "There is nothing new to explore",
        "There is no deeper purpose",
    ),
    preference(
        Sensing,
        "You notice details...",
        "In the environment around you",
        "That differ from how things usually are",
    ),
    order(
        Thinking,
        "When plans go wrong, your first move is to...",
        "Reorganize and push forward",
        "Diagnose what went wrong",
    ),
    order(
        Feeling,
        "When plans go wrong, your first concern is...",
        "How everyone is coping",
        "Whether it still feels right to you",
    ),
    dichotomy(
        JP,
        "Before a trip you...",
        "Plan an itinerary",
        "Decide as you go",
    ),
    preference(
        Thinking,
        "Inefficiency bothers you because...",
        "It wastes time and resources",
        "It reveals a flaw in the reasoning",
    ),
    preference(
        Feeling,
        "Praise means most to you when...",
        "It is shared publicly with the group",
        "It recognizes something you truly believe in",
    ),
];

/// Read-only queries over [`QUESTION_BANK`].
pub struct QuestionBank;

impl QuestionBank {
    pub fn all() -> &'static [Question] {
        &QUESTION_BANK
    }

    pub fn len() -> usize {
        QUESTION_BANK.len()
    }

    /// Returns the question at `index`, or None if out of range.
    pub fn get(index: usize) -> Option<&'static Question> {
        QUESTION_BANK.get(index)
    }

    /// Indices of every question in the given class.
    pub fn indices_by_class(class: QuestionClass) -> Vec<usize> {
        Self::indices_where(|q| q.question_class == class)
    }

    /// Indices of every question measuring the given axis.
    pub fn indices_by_axis(axis: QuestionAxis) -> Vec<usize> {
        Self::indices_where(|q| q.axis == axis)
    }

    fn indices_where(predicate: impl Fn(&Question) -> bool) -> Vec<usize> {
        QUESTION_BANK
            .iter()
            .enumerate()
            .filter(|(_, q)| predicate(q))
            .map(|(i, _)| i)
            .collect()
    }
}
