use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ProgressSummary;
use crate::routes::validation::{required_day, resolve_day};
use crate::services::stats;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressParams {
    pub user: String,
    /// Reference day; today when omitted
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub user: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct RangeResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub completions: i64,
}

/// Streak plus weekly and daily completion totals
pub async fn get_progress(
    State(state): State<AppState>,
    Query(params): Query<ProgressParams>,
) -> Result<Json<ProgressSummary>> {
    let today = resolve_day(params.as_of.as_deref())?;
    let summary = stats::progress_summary(&state.db, &params.user, today).await?;
    Ok(Json(summary))
}

/// Completed rows in an inclusive date range
pub async fn get_range(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<RangeResponse>> {
    let start = required_day(&params.start)?;
    let end = required_day(&params.end)?;
    let completions = stats::count_completed_in_range(&state.db, &params.user, start, end).await?;

    Ok(Json(RangeResponse {
        start,
        end,
        completions,
    }))
}
