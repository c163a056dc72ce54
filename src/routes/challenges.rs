use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::{CategoryGroup, ChallengeDefinition};
use crate::services::catalog;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ChallengesResponse {
    pub challenges: Vec<ChallengeDefinition>,
    pub categories: Vec<CategoryGroup>,
}

/// List the challenge catalog, flat and grouped by category
pub async fn list_challenges(State(state): State<AppState>) -> Result<Json<ChallengesResponse>> {
    let challenges = catalog::list_all(&state.db).await?;
    let categories = catalog::list_by_category(&state.db).await?;

    Ok(Json(ChallengesResponse {
        challenges,
        categories,
    }))
}
