//! Discussion board: append-only posts with threaded replies.

use chrono::Utc;

use crate::constants::{
    ALL_CATEGORIES, BOARD_CATEGORIES, ERR_EMPTY_POST, ERR_EMPTY_REPLY, ERR_UNKNOWN_CATEGORY,
};
use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::user::require_label;
use crate::models::{Post, PostFilter, Reply};

/// Create a new post
pub async fn add_post(
    db: &Db,
    author: &str,
    category: &str,
    title: &str,
    body: &str,
) -> Result<Post> {
    let author = require_label(author)?;
    if !BOARD_CATEGORIES.contains(&category) {
        tracing::warn!("Rejected post with unknown category: {:?}", category);
        return Err(AppError::validation(ERR_UNKNOWN_CATEGORY));
    }
    let (title, body) = (title.trim(), body.trim());
    if title.is_empty() || body.is_empty() {
        return Err(AppError::validation(ERR_EMPTY_POST));
    }

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (created_at, author, category, title, body)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, created_at, author, category, title, body
        "#,
    )
    .bind(Utc::now())
    .bind(&author)
    .bind(category)
    .bind(title)
    .bind(body)
    .fetch_one(db)
    .await?;

    tracing::info!("Post {} created by {}", post.id, post.author);
    Ok(post)
}

/// Reply to an existing post
pub async fn add_reply(db: &Db, post_id: i64, author: &str, body: &str) -> Result<Reply> {
    let author = require_label(author)?;
    let body = body.trim();
    if body.is_empty() {
        return Err(AppError::validation(ERR_EMPTY_REPLY));
    }
    ensure_post_exists(db, post_id).await?;

    let reply = sqlx::query_as::<_, Reply>(
        r#"
        INSERT INTO replies (post_id, created_at, author, body)
        VALUES (?, ?, ?, ?)
        RETURNING id, post_id, created_at, author, body
        "#,
    )
    .bind(post_id)
    .bind(Utc::now())
    .bind(&author)
    .bind(body)
    .fetch_one(db)
    .await?;

    tracing::info!("Reply {} added to post {} by {}", reply.id, post_id, reply.author);
    Ok(reply)
}

/// Posts matching the filter, newest first
pub async fn list_posts(db: &Db, filter: &PostFilter) -> Result<Vec<Post>> {
    let category = filter
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    let pattern = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", s));

    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, created_at, author, category, title, body
        FROM posts
        WHERE (?1 IS NULL OR category = ?1)
          AND (?2 IS NULL OR title LIKE ?2 OR body LIKE ?2)
        ORDER BY id DESC
        "#,
    )
    .bind(category)
    .bind(pattern)
    .fetch_all(db)
    .await?;

    Ok(posts)
}

/// Replies to a post, oldest first
pub async fn list_replies(db: &Db, post_id: i64) -> Result<Vec<Reply>> {
    ensure_post_exists(db, post_id).await?;

    let replies = sqlx::query_as::<_, Reply>(
        r#"
        SELECT id, post_id, created_at, author, body
        FROM replies
        WHERE post_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(db)
    .await?;

    Ok(replies)
}

async fn ensure_post_exists(db: &Db, post_id: i64) -> Result<()> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE id = ?")
        .bind(post_id)
        .fetch_optional(db)
        .await?;
    found.map(|_| ()).ok_or(AppError::PostNotFound)
}
