use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use quiz_common::ValidationErrors;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Urlencoded form body. A body that cannot be decoded is reported as a
/// validation error on the `body` field.
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(ValidationErrors::single("body", e.body_text())))?;
        Ok(AppForm(value))
    }
}
