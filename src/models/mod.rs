pub mod challenge;
pub mod post;
pub mod reflection;
pub mod user;

pub use challenge::{
    CategoryGroup, ChallengeDefinition, ChecklistItem, CompletionLog, ProgressSummary,
};
pub use post::{Post, PostFilter, Reply};
pub use reflection::Reflection;
