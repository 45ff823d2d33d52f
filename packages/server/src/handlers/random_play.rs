use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use quiz_common::{RoundStep, answer};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::extractors::quiz::ResolvedQuiz;
use crate::extractors::session::SessionContext;
use crate::models::page::Page;
use crate::models::quiz::{AnswerQuery, RandomPlayData, RandomResultData, RoundEndedData};
use crate::repository;
use crate::state::AppState;

/// Serve the next quiz of the round, or close the round when none remain.
#[instrument(skip(state, session))]
pub async fn random_play(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Response, AppError> {
    let mut round = session.random_play().await?;

    let step = repository::quiz::next_random_step(&state.db, &mut round).await?;
    session.store_random_play(&round).await?;

    let response = match step {
        RoundStep::RoundEnded { score } => {
            info!(score, "Random play round finished");
            session
                .render("quizzes/random_nomore", RoundEndedData { score })
                .await?
                .into_response()
        }
        RoundStep::Continue { quiz, score } => {
            debug!(quiz_id = quiz.id, score, "Serving random quiz");
            session
                .render(
                    "quizzes/random_play",
                    RandomPlayData {
                        quiz: quiz.into(),
                        score,
                    },
                )
                .await?
                .into_response()
        }
    };
    Ok(response)
}

/// Check an answer given during random play and update the round.
#[instrument(skip(session, quiz, query), fields(id = quiz.0.id))]
pub async fn random_check(
    session: SessionContext,
    quiz: ResolvedQuiz,
    Query(query): Query<AnswerQuery>,
) -> Result<Page<RandomResultData>, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    let mut round = session.random_play().await?;

    let correct = answer::is_correct(&query.answer, &quiz.answer);
    let outcome = round.record(quiz.id, correct);
    session.store_random_play(&round).await?;

    if !outcome.result {
        info!("Wrong answer, random play round reset");
    }

    session
        .render(
            "quizzes/random_result",
            RandomResultData {
                result: outcome.result,
                answer: query.answer,
                score: outcome.score,
            },
        )
        .await
}
