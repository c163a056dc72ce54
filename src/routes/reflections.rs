use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Reflection;
use crate::routes::validation::{required_day, UserDayParams};
use crate::services::reflection;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ReflectionResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub reflection: Reflection,
}

/// Full replacement of a day's reflection; missing fields are saved as empty
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReflectionRequest {
    pub user: String,
    pub date: String,
    #[serde(default)]
    pub win: String,
    #[serde(default)]
    pub stress_shift: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct SaveReflectionResponse {
    pub success: bool,
}

pub async fn get_reflection(
    State(state): State<AppState>,
    Query(params): Query<UserDayParams>,
) -> Result<Json<ReflectionResponse>> {
    let date = params.day()?;
    let reflection = reflection::get_reflection(&state.db, &params.user, date).await?;

    Ok(Json(ReflectionResponse { date, reflection }))
}

pub async fn save_reflection(
    State(state): State<AppState>,
    Json(payload): Json<SaveReflectionRequest>,
) -> Result<Json<SaveReflectionResponse>> {
    let date = required_day(&payload.date)?;
    let entry = Reflection::new(&payload.win, &payload.stress_shift, &payload.note);
    reflection::save_reflection(&state.db, &payload.user, date, &entry).await?;

    Ok(Json(SaveReflectionResponse { success: true }))
}
