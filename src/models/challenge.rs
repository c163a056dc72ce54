use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A challenge in the shared catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    /// Stable unique identifier, e.g. `BREATH_RESET`
    pub code: String,
    pub title: String,
    pub category: String,
    pub instruction: String,
    /// Suggested time to spend on the challenge
    pub target_seconds: i64,
}

impl ChallengeDefinition {
    pub fn new(
        code: &str,
        title: &str,
        category: &str,
        instruction: &str,
        target_seconds: i64,
    ) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            instruction: instruction.to_string(),
            target_seconds,
        }
    }
}

/// Catalog entries sharing one category, in catalog order
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub challenges: Vec<ChallengeDefinition>,
}

/// Current completion state of one challenge for one user on one day
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompletionLog {
    pub log_date: NaiveDate,
    pub user_label: String,
    pub challenge_code: String,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}

/// A catalog entry paired with the user's state for a given day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(flatten)]
    pub challenge: ChallengeDefinition,
    pub completed: bool,
}

/// Dashboard numbers for one user as of a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub streak: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub week_completions: i64,
    pub today_completions: i64,
}
