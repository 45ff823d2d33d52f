//! Random-play round state.
//!
//! A round is the list of quiz ids answered correctly so far. It lives in the
//! player's session; the server loads it at the start of a request, applies
//! one transition, and stores it back.

use serde::{Deserialize, Serialize};

/// Session key under which the round is stored.
pub const SESSION_KEY: &str = "randomPlay";

/// Quiz ids answered correctly in the current round, in answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomPlay {
    answered: Vec<i32>,
}

/// What to show next when a player asks for a random quiz.
///
/// Exactly one variant is produced per request, so a finished round can never
/// also serve a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStep<Q> {
    /// Every quiz has been answered. The round has been reset.
    RoundEnded { score: usize },
    /// Keep playing with `quiz`.
    Continue { quiz: Q, score: usize },
}

/// Result of checking one answer during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub result: bool,
    pub score: usize,
}

impl RandomPlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids to exclude when drawing the next quiz.
    pub fn answered(&self) -> &[i32] {
        &self.answered
    }

    pub fn score(&self) -> usize {
        self.answered.len()
    }

    pub fn contains(&self, quiz_id: i32) -> bool {
        self.answered.contains(&quiz_id)
    }

    /// Start over with an empty round.
    pub fn reset(&mut self) {
        self.answered.clear();
    }

    /// Close the round after every quiz was answered, returning the final score.
    pub fn finish(&mut self) -> usize {
        let score = self.score();
        self.reset();
        score
    }

    /// Decide the next step given how many quizzes remain outside the round
    /// and the quiz drawn from them.
    ///
    /// Returns `None` when quizzes remain but nothing was drawn, i.e. the
    /// drawn row disappeared between counting and fetching; the caller draws
    /// again.
    pub fn next_step<Q>(&mut self, remaining: u64, drawn: Option<Q>) -> Option<RoundStep<Q>> {
        if remaining == 0 {
            return Some(RoundStep::RoundEnded {
                score: self.finish(),
            });
        }
        drawn.map(|quiz| RoundStep::Continue {
            quiz,
            score: self.score(),
        })
    }

    /// Apply an answer to `quiz_id`.
    ///
    /// A correct answer records the id once; answering the same quiz again
    /// leaves the score unchanged. A wrong answer ends the round.
    pub fn record(&mut self, quiz_id: i32, correct: bool) -> CheckOutcome {
        if correct {
            if !self.contains(quiz_id) {
                self.answered.push(quiz_id);
            }
        } else {
            self.reset();
        }
        CheckOutcome {
            result: correct,
            score: self.score(),
        }
    }
}
