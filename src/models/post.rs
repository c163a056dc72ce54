use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discussion board post
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub category: String,
    pub title: String,
    pub body: String,
}

/// A reply attached to a post
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}

/// Browse filter for posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFilter {
    /// Substring matched against title or body
    pub search: Option<String>,
    /// Exact category, or `"All"` for no filter
    pub category: Option<String>,
}
