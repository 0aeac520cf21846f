// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter state endpoints: defaults, option tables and the reducer.

use crate::error::{AppError, Result};
use crate::models::category::Category;
use crate::models::filters::{filter_groups, FilterAction, FilterCriteria, FilterGroup};
use crate::services::reducer::reduce;
use crate::AppState;
use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/filters/{slug}/defaults", get(get_defaults))
        .route("/api/filters/{slug}/options", get(get_options))
        .route("/api/filters/reduce", post(reduce_filters))
}

/// `all` selects base-only criteria; anything else must name a category.
fn scope_from_path(slug: &str) -> Result<Option<Category>> {
    if slug == "all" {
        Ok(None)
    } else {
        super::category_from_path(slug).map(Some)
    }
}

async fn get_defaults(Path(slug): Path<String>) -> Result<Json<FilterCriteria>> {
    let scope = scope_from_path(&slug)?;
    Ok(Json(FilterCriteria::default_for(scope)))
}

async fn get_options(Path(slug): Path<String>) -> Result<Json<Vec<FilterGroup>>> {
    let scope = scope_from_path(&slug)?;
    Ok(Json(filter_groups(scope)))
}

#[derive(Deserialize)]
pub struct ReduceRequest {
    pub criteria: FilterCriteria,
    /// Decoded with [`FilterAction::from_value`] so unknown types pass through.
    pub action: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReduceResponse {
    pub criteria: FilterCriteria,
    pub active_filters: usize,
    pub has_active_filters: bool,
}

/// Apply one filter action to a criteria value.
async fn reduce_filters(Json(request): Json<ReduceRequest>) -> Result<Json<ReduceResponse>> {
    let action = FilterAction::from_value(request.action)
        .map_err(|e| AppError::BadRequest(format!("Invalid filter action: {}", e)))?;
    if action == FilterAction::Unknown {
        tracing::debug!("Ignoring unknown filter action");
    }

    let criteria = reduce(&request.criteria, &action);
    Ok(Json(ReduceResponse {
        active_filters: criteria.active_count(),
        has_active_filters: criteria.is_active(),
        criteria,
    }))
}
