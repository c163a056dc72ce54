use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Post, PostFilter, Reply};
use crate::services::board;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author: String,
    pub category: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub author: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct RepliesResponse {
    pub replies: Vec<Reply>,
}

/// Browse posts, optionally filtered by `search` and `category`
pub async fn list_posts(
    State(state): State<AppState>,
    Query(filter): Query<PostFilter>,
) -> Result<Json<PostsResponse>> {
    let posts = board::list_posts(&state.db, &filter).await?;
    Ok(Json(PostsResponse { posts }))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<Post>> {
    let post = board::add_post(
        &state.db,
        &payload.author,
        &payload.category,
        &payload.title,
        &payload.body,
    )
    .await?;
    Ok(Json(post))
}

pub async fn list_replies(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<RepliesResponse>> {
    let replies = board::list_replies(&state.db, post_id).await?;
    Ok(Json(RepliesResponse { replies }))
}

pub async fn create_reply(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<Json<Reply>> {
    let reply = board::add_reply(&state.db, post_id, &payload.author, &payload.body).await?;
    Ok(Json(reply))
}
