use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use quiz_common::{ErrorKind, QuizFields, answer};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::extractors::quiz::ResolvedQuiz;
use crate::extractors::session::SessionContext;
use crate::models::page::Page;
use crate::models::quiz::*;
use crate::repository::{self, RepoError};
use crate::state::AppState;

/// `GET /` sends visitors to the quiz list.
pub async fn home() -> Redirect {
    Redirect::to("/quizzes")
}

#[instrument(skip(state, session))]
pub async fn list_quizzes(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Page<QuizListData>, AppError> {
    let quizzes = repository::quiz::find_all(&state.db).await?;

    session
        .render(
            "quizzes/index",
            QuizListData {
                quizzes: quizzes.into_iter().map(QuizView::from).collect(),
            },
        )
        .await
}

#[instrument(skip(session, quiz), fields(id = quiz.0.id))]
pub async fn show_quiz(
    session: SessionContext,
    quiz: ResolvedQuiz,
) -> Result<Page<QuizData>, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    session
        .render("quizzes/show", QuizData { quiz: quiz.into() })
        .await
}

pub async fn new_quiz(session: SessionContext) -> Result<Page<QuizData>, AppError> {
    session
        .render(
            "quizzes/new",
            QuizData {
                quiz: QuizView::blank(),
            },
        )
        .await
}

#[instrument(skip(state, session, submitted))]
pub async fn create_quiz(
    State(state): State<AppState>,
    session: SessionContext,
    AppForm(submitted): AppForm<QuizFields>,
) -> Result<Response, AppError> {
    match repository::quiz::create(&state.db, &submitted).await {
        Ok(quiz) => {
            info!(id = quiz.id, "Quiz created");
            session.flash_success("Quiz created successfully.").await?;
            Ok(Redirect::to(&format!("/quizzes/{}", quiz.id)).into_response())
        }
        Err(err) => {
            let form = QuizView::from_form(None, submitted);
            form_failure(&session, "quizzes/new", form, err, "Error creating a new Quiz.").await
        }
    }
}

#[instrument(skip(session, quiz), fields(id = quiz.0.id))]
pub async fn edit_quiz(
    session: SessionContext,
    quiz: ResolvedQuiz,
) -> Result<Page<QuizData>, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    session
        .render("quizzes/edit", QuizData { quiz: quiz.into() })
        .await
}

#[instrument(skip(state, session, quiz, submitted), fields(id = quiz.0.id))]
pub async fn update_quiz(
    State(state): State<AppState>,
    session: SessionContext,
    quiz: ResolvedQuiz,
    AppForm(submitted): AppForm<QuizFields>,
) -> Result<Response, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    let id = quiz.id;

    match repository::quiz::update(&state.db, quiz, &submitted).await {
        Ok(quiz) => {
            info!("Quiz updated");
            session.flash_success("Quiz edited successfully.").await?;
            Ok(Redirect::to(&format!("/quizzes/{}", quiz.id)).into_response())
        }
        Err(err) => {
            let form = QuizView::from_form(Some(id), submitted);
            form_failure(&session, "quizzes/edit", form, err, "Error editing the Quiz.").await
        }
    }
}

#[instrument(skip(state, session, quiz), fields(id = quiz.0.id))]
pub async fn delete_quiz(
    State(state): State<AppState>,
    session: SessionContext,
    quiz: ResolvedQuiz,
) -> Result<Redirect, AppError> {
    let ResolvedQuiz(quiz) = quiz;

    if let Err(e) = repository::quiz::delete(&state.db, quiz).await {
        return Err(AppError::from(e).with_flash_error("Error deleting the Quiz."));
    }

    info!("Quiz deleted");
    session.flash_success("Quiz deleted successfully.").await?;
    Ok(Redirect::to("/quizzes"))
}

#[instrument(skip(session, quiz, query), fields(id = quiz.0.id))]
pub async fn play_quiz(
    session: SessionContext,
    quiz: ResolvedQuiz,
    Query(query): Query<AnswerQuery>,
) -> Result<Page<PlayData>, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    session
        .render(
            "quizzes/play",
            PlayData {
                quiz: quiz.into(),
                answer: query.answer,
            },
        )
        .await
}

#[instrument(skip(session, quiz, query), fields(id = quiz.0.id))]
pub async fn check_quiz(
    session: SessionContext,
    quiz: ResolvedQuiz,
    Query(query): Query<AnswerQuery>,
) -> Result<Page<ResultData>, AppError> {
    let ResolvedQuiz(quiz) = quiz;
    let result = answer::is_correct(&query.answer, &quiz.answer);

    session
        .render(
            "quizzes/result",
            ResultData {
                quiz: quiz.into(),
                result,
                answer: query.answer,
            },
        )
        .await
}

/// Handle a failed create or update.
///
/// Validation errors show the form again with the submitted values and one
/// flash message per failing field. Anything else fails the request with
/// `generic_message` on the error page.
async fn form_failure(
    session: &SessionContext,
    view: &'static str,
    form: QuizView,
    err: RepoError,
    generic_message: &str,
) -> Result<Response, AppError> {
    if err.kind() != ErrorKind::Validation {
        return Err(AppError::from(err).with_flash_error(generic_message));
    }

    session.flash_error("There are errors in the form:").await?;
    if let RepoError::Validation(errors) = &err {
        for message in errors.messages() {
            session.flash_error(message).await?;
        }
    }
    let page = session.render(view, QuizData { quiz: form }).await?;
    Ok(page
        .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        .into_response())
}
