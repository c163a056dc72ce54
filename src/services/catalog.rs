//! Challenge catalog: the fixed, seedable set of challenges every user sees.

use crate::db::Db;
use crate::error::Result;
use crate::models::{CategoryGroup, ChallengeDefinition};

/// The default challenge set, in display order
pub fn default_challenges() -> Vec<ChallengeDefinition> {
    vec![
        ChallengeDefinition::new(
            "CHALLENGE_MINDSET",
            "Challenge mindset",
            "Stress → Performance",
            "Pick ONE moment today to reframe as a challenge (not a threat). Say: “I’m excited” or “This is practice.”",
            60,
        ),
        ChallengeDefinition::new(
            "BREATH_RESET",
            "30-second breathing reset",
            "Stress → Performance",
            "Breathe in for 5, out for 5 (or 6) for 3 cycles. Use before meetings/classes.",
            45,
        ),
        ChallengeDefinition::new(
            "SMALL_GOAL",
            "Small goal (finishable)",
            "Momentum",
            "Write ONE small task you will finish today. When done, take 2 minutes to enjoy the win.",
            90,
        ),
        ChallengeDefinition::new(
            "MOVE_10",
            "10-minute brisk walk",
            "Brain boost",
            "Move for 10 minutes (walk counts). Outdoor if possible. Aim to reset your head, not smash a workout.",
            600,
        ),
        ChallengeDefinition::new(
            "SINGLE_TASK",
            "Single-task focus",
            "Workload",
            "Turn off notifications for 20 minutes and do ONE thing properly.",
            1200,
        ),
        ChallengeDefinition::new(
            "POSTURE_CHECK",
            "Posture check",
            "Energy",
            "Sit tall / shoulders open for 60 seconds. Head up. Reset your state.",
            60,
        ),
        ChallengeDefinition::new(
            "RIGHT_HAND_SQUEEZE",
            "Right-hand squeeze",
            "Confidence",
            "Squeeze your right hand firmly for ~45 seconds before a stressful moment (call / presentation).",
            45,
        ),
        ChallengeDefinition::new(
            "PAUSE_BETWEEN",
            "Pause between tasks",
            "Attention",
            "Take a 2–5 minute pause between tasks (breathing / stretch / short reset) instead of rushing.",
            180,
        ),
    ]
}

/// Insert every default challenge whose code is not already present
///
/// Existing rows are never updated. Returns the number of rows inserted.
pub async fn seed_defaults(db: &Db) -> Result<u64> {
    seed(db, &default_challenges()).await
}

/// Insert-if-absent for an arbitrary definition set
pub async fn seed(db: &Db, definitions: &[ChallengeDefinition]) -> Result<u64> {
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for def in definitions {
        let result = sqlx::query(
            r#"
            INSERT INTO challenges (code, title, category, instruction, target_seconds)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(code) DO NOTHING
            "#,
        )
        .bind(&def.code)
        .bind(&def.title)
        .bind(&def.category)
        .bind(&def.instruction)
        .bind(def.target_seconds)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;

    if inserted > 0 {
        tracing::info!("Seeded {} challenge definitions", inserted);
    }

    Ok(inserted)
}

/// All challenges in creation order
pub async fn list_all(db: &Db) -> Result<Vec<ChallengeDefinition>> {
    let challenges = sqlx::query_as::<_, ChallengeDefinition>(
        "SELECT code, title, category, instruction, target_seconds FROM challenges ORDER BY id ASC",
    )
    .fetch_all(db)
    .await?;
    Ok(challenges)
}

/// Challenges grouped by category
///
/// Categories appear in the order their first challenge was created.
pub async fn list_by_category(db: &Db) -> Result<Vec<CategoryGroup>> {
    Ok(group_by_category(list_all(db).await?))
}

fn group_by_category(challenges: Vec<ChallengeDefinition>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for challenge in challenges {
        match groups.iter_mut().find(|g| g.category == challenge.category) {
            Some(group) => group.challenges.push(challenge),
            None => groups.push(CategoryGroup {
                category: challenge.category.clone(),
                challenges: vec![challenge],
            }),
        }
    }
    groups
}
