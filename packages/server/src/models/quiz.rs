use quiz_common::QuizFields;
use serde::{Deserialize, Serialize};

use crate::entity::quiz;

/// Query string of the play and check endpoints.
#[derive(Debug, Deserialize)]
pub struct AnswerQuery {
    #[serde(default)]
    pub answer: String,
}

/// A quiz including its answer. `id` is absent on the new-quiz form.
#[derive(Debug, Serialize)]
pub struct QuizView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub question: String,
    pub answer: String,
}

/// A quiz as shown to a player: the answer stays hidden.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: i32,
    pub question: String,
}

#[derive(Serialize)]
pub struct QuizListData {
    pub quizzes: Vec<QuizView>,
}

#[derive(Serialize)]
pub struct QuizData {
    pub quiz: QuizView,
}

#[derive(Serialize)]
pub struct PlayData {
    pub quiz: QuestionView,
    pub answer: String,
}

#[derive(Serialize)]
pub struct ResultData {
    pub quiz: QuizView,
    pub result: bool,
    pub answer: String,
}

#[derive(Serialize)]
pub struct RandomPlayData {
    pub quiz: QuestionView,
    pub score: usize,
}

#[derive(Serialize)]
pub struct RoundEndedData {
    pub score: usize,
}

#[derive(Serialize)]
pub struct RandomResultData {
    pub result: bool,
    pub answer: String,
    pub score: usize,
}

impl From<quiz::Model> for QuizView {
    fn from(m: quiz::Model) -> Self {
        Self {
            id: Some(m.id),
            question: m.question,
            answer: m.answer,
        }
    }
}

impl From<quiz::Model> for QuestionView {
    fn from(m: quiz::Model) -> Self {
        Self {
            id: m.id,
            question: m.question,
        }
    }
}

impl QuizView {
    /// The submitted form values, shown again when they fail validation.
    pub fn from_form(id: Option<i32>, fields: QuizFields) -> Self {
        Self {
            id,
            question: fields.question,
            answer: fields.answer,
        }
    }

    /// The blank new-quiz form.
    pub fn blank() -> Self {
        Self::from_form(None, QuizFields::default())
    }
}
