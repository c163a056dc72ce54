//! Completion log: the current done/not-done state per user, day and challenge.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

use crate::constants::ERR_MISSING_CHALLENGE_CODE;
use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::user::require_label;
use crate::models::{ChecklistItem, CompletionLog};
use crate::services::catalog;

/// Record whether `user` completed `challenge_code` on `log_date`
///
/// A single atomic upsert: the first call creates the row, later calls
/// overwrite `completed` and `recorded_at`, so only the final state for the
/// day is kept. The challenge code is not checked against the catalog.
pub async fn set_completion(
    db: &Db,
    user: &str,
    log_date: NaiveDate,
    challenge_code: &str,
    completed: bool,
) -> Result<()> {
    let user = require_label(user)?;
    let challenge_code = challenge_code.trim();
    if challenge_code.is_empty() {
        return Err(AppError::validation(ERR_MISSING_CHALLENGE_CODE));
    }

    sqlx::query(
        r#"
        INSERT INTO challenge_logs (log_date, author, challenge_code, completed, recorded_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(log_date, author, challenge_code) DO UPDATE SET
            completed = excluded.completed,
            recorded_at = excluded.recorded_at
        "#,
    )
    .bind(log_date)
    .bind(&user)
    .bind(challenge_code)
    .bind(completed)
    .bind(Utc::now())
    .execute(db)
    .await?;

    tracing::info!(
        "Completion for {} on {}: {} = {}",
        user,
        log_date,
        challenge_code,
        completed
    );

    Ok(())
}

/// Completion state per challenge code for exactly `log_date`
///
/// Codes with no row are absent; callers treat them as not completed.
pub async fn get_user_logs(
    db: &Db,
    user: &str,
    log_date: NaiveDate,
) -> Result<HashMap<String, bool>> {
    let user = require_label(user)?;

    let rows: Vec<(String, bool)> = sqlx::query_as(
        r#"
        SELECT challenge_code, completed
        FROM challenge_logs
        WHERE author = ? AND log_date = ?
        "#,
    )
    .bind(&user)
    .bind(log_date)
    .fetch_all(db)
    .await?;

    tracing::debug!("Loaded {} log rows for {} on {}", rows.len(), user, log_date);

    Ok(rows.into_iter().collect())
}

/// The stored row for one (user, day, challenge), if any
pub async fn get_log(
    db: &Db,
    user: &str,
    log_date: NaiveDate,
    challenge_code: &str,
) -> Result<Option<CompletionLog>> {
    let user = require_label(user)?;

    let log = sqlx::query_as::<_, CompletionLog>(
        r#"
        SELECT log_date, author AS user_label, challenge_code, completed, recorded_at
        FROM challenge_logs
        WHERE author = ? AND log_date = ? AND challenge_code = ?
        "#,
    )
    .bind(&user)
    .bind(log_date)
    .bind(challenge_code.trim())
    .fetch_optional(db)
    .await?;

    Ok(log)
}

/// The full catalog for a day, each entry marked with the user's state
pub async fn daily_checklist(
    db: &Db,
    user: &str,
    log_date: NaiveDate,
) -> Result<Vec<ChecklistItem>> {
    let logs = get_user_logs(db, user, log_date).await?;
    let challenges = catalog::list_all(db).await?;

    Ok(challenges
        .into_iter()
        .map(|challenge| {
            let completed = logs.get(&challenge.code).copied().unwrap_or(false);
            ChecklistItem {
                challenge,
                completed,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_db;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn row_count(db: &Db, user: &str, date: NaiveDate, code: &str) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM challenge_logs WHERE author = ? AND log_date = ? AND challenge_code = ?",
        )
        .bind(user)
        .bind(date)
        .bind(code)
        .fetch_one(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_set_completion_idempotent() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        set_completion(&db, "alice", day, "BREATH_RESET", true).await.unwrap();
        set_completion(&db, "alice", day, "BREATH_RESET", true).await.unwrap();

        assert_eq!(row_count(&db, "alice", day, "BREATH_RESET").await, 1);
        let log = get_log(&db, "alice", day, "BREATH_RESET").await.unwrap().unwrap();
        assert!(log.completed);
        assert_eq!(log.log_date, day);
        assert_eq!(log.user_label, "alice");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        set_completion(&db, "alice", day, "MOVE_10", true).await.unwrap();
        let first = get_log(&db, "alice", day, "MOVE_10").await.unwrap().unwrap();

        set_completion(&db, "alice", day, "MOVE_10", false).await.unwrap();
        let second = get_log(&db, "alice", day, "MOVE_10").await.unwrap().unwrap();

        assert!(!second.completed);
        assert!(second.recorded_at >= first.recorded_at);
        assert_eq!(row_count(&db, "alice", day, "MOVE_10").await, 1);

        let logs = get_user_logs(&db, "alice", day).await.unwrap();
        assert_eq!(logs.get("MOVE_10"), Some(&false));
    }

    #[tokio::test]
    async fn test_get_user_logs_exact_date_only() {
        let (db, _tmp) = test_db().await;

        set_completion(&db, "alice", d("2024-01-01"), "SMALL_GOAL", true).await.unwrap();
        set_completion(&db, "alice", d("2024-01-02"), "MOVE_10", true).await.unwrap();
        set_completion(&db, "bob", d("2024-01-01"), "MOVE_10", true).await.unwrap();

        let logs = get_user_logs(&db, "alice", d("2024-01-01")).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs.get("SMALL_GOAL"), Some(&true));
        assert_eq!(logs.get("MOVE_10"), None);

        assert!(get_user_logs(&db, "alice", d("2023-12-31")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_label_is_normalized_before_storage() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        set_completion(&db, "  Ms. H!! ", day, "MOVE_10", true).await.unwrap();

        let logs = get_user_logs(&db, "Ms H", day).await.unwrap();
        assert_eq!(logs.get("MOVE_10"), Some(&true));
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        let err = set_completion(&db, "  ", day, "MOVE_10", true).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = set_completion(&db, "alice", day, " ", true).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(matches!(
            get_user_logs(&db, "!!", day).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_code_is_accepted() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        set_completion(&db, "alice", day, "RETIRED_CHALLENGE", true).await.unwrap();
        let logs = get_user_logs(&db, "alice", day).await.unwrap();
        assert_eq!(logs.get("RETIRED_CHALLENGE"), Some(&true));
    }

    #[tokio::test]
    async fn test_daily_checklist_defaults_to_incomplete() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        set_completion(&db, "alice", day, "SMALL_GOAL", true).await.unwrap();
        set_completion(&db, "alice", day, "RETIRED_CHALLENGE", true).await.unwrap();

        let checklist = daily_checklist(&db, "alice", day).await.unwrap();
        assert_eq!(checklist.len(), catalog::default_challenges().len());
        assert_eq!(checklist[0].challenge.code, "CHALLENGE_MINDSET");

        let done: Vec<&str> = checklist
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.challenge.code.as_str())
            .collect();
        assert_eq!(done, vec!["SMALL_GOAL"]);
    }

    #[tokio::test]
    async fn test_concurrent_upserts_keep_one_row() {
        let (db, _tmp) = test_db().await;
        let day = d("2024-01-01");

        let mut handles = Vec::new();
        for i in 0..16 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                set_completion(&db, "alice", day, "SINGLE_TASK", i % 2 == 0).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(row_count(&db, "alice", day, "SINGLE_TASK").await, 1);
        assert!(get_log(&db, "alice", day, "SINGLE_TASK").await.unwrap().is_some());
    }
}
