use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ChecklistItem;
use crate::routes::validation::{required_day, UserDayParams};
use crate::services::completion;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub date: NaiveDate,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCompletionRequest {
    pub user: String,
    pub date: String,
    pub challenge_code: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCompletionResponse {
    pub success: bool,
    pub date: NaiveDate,
    pub challenge_code: String,
    pub completed: bool,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// The day's checklist: every catalog challenge with the user's state
pub async fn get_checklist(
    State(state): State<AppState>,
    Query(params): Query<UserDayParams>,
) -> Result<Json<ChecklistResponse>> {
    let date = params.day()?;
    let items = completion::daily_checklist(&state.db, &params.user, date).await?;

    Ok(Json(ChecklistResponse { date, items }))
}

/// Tick or untick one challenge for one day
pub async fn set_completion(
    State(state): State<AppState>,
    Json(payload): Json<SetCompletionRequest>,
) -> Result<Json<SetCompletionResponse>> {
    let date = required_day(&payload.date)?;
    completion::set_completion(
        &state.db,
        &payload.user,
        date,
        &payload.challenge_code,
        payload.completed,
    )
    .await?;

    // Read back the stored row; a concurrent writer may have landed after us
    let stored =
        completion::get_log(&state.db, &payload.user, date, &payload.challenge_code).await?;

    Ok(Json(SetCompletionResponse {
        success: true,
        date,
        challenge_code: payload.challenge_code.trim().to_string(),
        completed: stored
            .as_ref()
            .map(|log| log.completed)
            .unwrap_or(payload.completed),
        recorded_at: stored.map(|log| log.recorded_at),
    }))
}
