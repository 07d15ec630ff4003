//! ListQuestionsHandler - Query handler for the question bank.

use serde::Serialize;

use crate::domain::typology::{Question, QuestionBank, QuestionClass};

/// Query the question bank, optionally restricted to one class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsQuery {
    pub class: Option<QuestionClass>,
}

/// A question together with the index responses refer to it by.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionView {
    pub index: usize,
    #[serde(flatten)]
    pub question: &'static Question,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsHandler;

impl ListQuestionsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ListQuestionsQuery) -> Vec<QuestionView> {
        QuestionBank::all()
            .iter()
            .enumerate()
            .filter(|(_, question)| query.class.map_or(true, |class| question.question_class == class))
            .map(|(index, question)| QuestionView { index, question })
            .collect()
    }
}
