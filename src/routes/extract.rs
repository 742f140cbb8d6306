// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request body extraction shared by the write endpoints.

use crate::error::AppError;
use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

/// Extracts the request body as JSON or a URL-encoded form, depending on
/// the Content-Type header. Browsers submit forms; API clients send JSON.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e.body_text())))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid form body: {}", e.body_text())))?;
            Ok(Self(value))
        }
    }
}
