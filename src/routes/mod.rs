pub mod challenges;
pub mod health;
pub mod logs;
pub mod posts;
pub mod progress;
pub mod reflections;
pub mod validation;

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use challenges::list_challenges;
pub use health::health_check;
pub use logs::{get_checklist, set_completion};
pub use posts::{create_post, create_reply, list_posts, list_replies};
pub use progress::{get_progress, get_range};
pub use reflections::{get_reflection, save_reflection};

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/challenges", get(list_challenges))
        .route("/api/logs", get(get_checklist).put(set_completion))
        .route("/api/reflections", get(get_reflection).put(save_reflection))
        .route("/api/progress", get(get_progress))
        .route("/api/progress/range", get(get_range))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/:id/replies", get(list_replies).post(create_reply))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
