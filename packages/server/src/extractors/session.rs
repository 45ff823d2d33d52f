use axum::{extract::FromRequestParts, http::request::Parts};
use quiz_common::RandomPlay;
use quiz_common::random_play::SESSION_KEY as RANDOM_PLAY_KEY;
use serde::Serialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::page::{Flash, Page};

const FLASH_KEY: &str = "flash";

/// Per-request view of the client's session.
///
/// Holds the random-play round and pending flash messages. Every change is
/// written back to the session store at the end of the request.
pub struct SessionContext {
    session: Session,
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;
        Ok(Self { session })
    }
}

impl SessionContext {
    /// The current round, empty if none was started yet.
    pub async fn random_play(&self) -> Result<RandomPlay, AppError> {
        Ok(self
            .session
            .get::<RandomPlay>(RANDOM_PLAY_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn store_random_play(&self, round: &RandomPlay) -> Result<(), AppError> {
        self.session.insert(RANDOM_PLAY_KEY, round).await?;
        Ok(())
    }

    pub async fn flash_success(&self, message: impl Into<String>) -> Result<(), AppError> {
        let mut flash = self.pending_flash().await?;
        flash.success.push(message.into());
        self.session.insert(FLASH_KEY, flash).await?;
        Ok(())
    }

    pub async fn flash_error(&self, message: impl Into<String>) -> Result<(), AppError> {
        let mut flash = self.pending_flash().await?;
        flash.error.push(message.into());
        self.session.insert(FLASH_KEY, flash).await?;
        Ok(())
    }

    async fn pending_flash(&self) -> Result<Flash, AppError> {
        Ok(self.session.get::<Flash>(FLASH_KEY).await?.unwrap_or_default())
    }

    /// Remove and return pending messages. Only touches the session when
    /// something is pending, so plain page views do not create sessions.
    pub async fn take_flash(&self) -> Result<Flash, AppError> {
        match self.session.get::<Flash>(FLASH_KEY).await? {
            Some(_) => Ok(self
                .session
                .remove::<Flash>(FLASH_KEY)
                .await?
                .unwrap_or_default()),
            None => Ok(Flash::default()),
        }
    }

    /// Build a page for `view`, consuming pending flash messages.
    pub async fn render<T: Serialize>(
        &self,
        view: &'static str,
        data: T,
    ) -> Result<Page<T>, AppError> {
        let flash = self.take_flash().await?;
        Ok(Page::new(view, flash, data))
    }
}
