// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Newsletter signup.

use crate::error::{AppError, Result};
use crate::models::newsletter::SubscribeRequest;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/newsletter", get(get_count).post(subscribe))
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub count: usize,
}

async fn subscribe(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscribeResponse>)> {
    // A non-string email or unparseable body is reported like a missing one
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected newsletter body");
        AppError::BadRequest("Email is required".to_string())
    })?;

    state.newsletter.subscribe(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponse {
            message: "Successfully subscribed",
        }),
    ))
}

async fn get_count(State(state): State<Arc<AppState>>) -> Result<Json<CountResponse>> {
    Ok(Json(CountResponse {
        count: state.newsletter.count().await?,
    }))
}
