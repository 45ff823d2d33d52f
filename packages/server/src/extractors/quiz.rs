use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::entity::quiz;
use crate::error::AppError;
use crate::repository;
use crate::state::AppState;

/// The quiz named by the `{id}` route segment, loaded before the handler runs.
///
/// An id that does not parse or matches no row rejects the request with
/// `NOT_FOUND`, so handlers taking this extractor never see a missing quiz.
pub struct ResolvedQuiz(pub quiz::Model);

impl FromRequestParts<AppState> for ResolvedQuiz {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        let id: i32 = raw
            .parse()
            .map_err(|_| AppError::NotFound(format!("There is no quiz with id={raw}")))?;

        let quiz = repository::quiz::find_quiz(&state.db, id).await?;
        Ok(ResolvedQuiz(quiz))
    }
}
