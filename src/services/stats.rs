//! Derived progress metrics.
//!
//! Everything here is read-only and driven only by completion rows with
//! `completed = 1`. Reflections never count. The reference day is always
//! supplied by the caller; nothing in this module reads the clock.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::dates::week_bounds;
use crate::db::Db;
use crate::error::Result;
use crate::models::user::require_label;
use crate::models::ProgressSummary;

/// Number of consecutive days ending at `as_of` with at least one completion
///
/// Anchored at `as_of`: if that day has no completion the streak is 0 even
/// when the previous day does.
pub async fn compute_streak(db: &Db, user: &str, as_of: NaiveDate) -> Result<u32> {
    let user = require_label(user)?;

    let dates: Vec<NaiveDate> = sqlx::query_scalar(
        r#"
        SELECT DISTINCT log_date
        FROM challenge_logs
        WHERE author = ? AND completed = 1 AND log_date <= ?
        "#,
    )
    .bind(&user)
    .bind(as_of)
    .fetch_all(db)
    .await?;

    let streak = streak_from_dates(&dates.into_iter().collect(), as_of);
    tracing::debug!("Streak for {} as of {}: {}", user, as_of, streak);
    Ok(streak)
}

/// Walk backward from `as_of` until the first day missing from `dates`
fn streak_from_dates(dates: &HashSet<NaiveDate>, as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = Some(as_of);
    while let Some(current) = day.filter(|d| dates.contains(d)) {
        streak += 1;
        day = current.pred_opt();
    }
    streak
}

/// Completed rows between `start` and `end`, both inclusive
///
/// Counts rows, not days: three challenges done on one day count as 3.
pub async fn count_completed_in_range(
    db: &Db,
    user: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<i64> {
    let user = require_label(user)?;
    if start > end {
        return Ok(0);
    }

    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM challenge_logs
        WHERE author = ? AND completed = 1 AND log_date >= ? AND log_date <= ?
        "#,
    )
    .bind(&user)
    .bind(start)
    .bind(end)
    .fetch_one(db)
    .await?;

    Ok(count)
}

/// Completed rows on a single day
pub async fn count_completed_on_date(db: &Db, user: &str, date: NaiveDate) -> Result<i64> {
    count_completed_in_range(db, user, date, date).await
}

/// Streak, this week's (Monday to Sunday) total and today's total
pub async fn progress_summary(db: &Db, user: &str, today: NaiveDate) -> Result<ProgressSummary> {
    let (week_start, week_end) = week_bounds(today)?;

    Ok(ProgressSummary {
        streak: compute_streak(db, user, today).await?,
        week_start,
        week_end,
        week_completions: count_completed_in_range(db, user, week_start, week_end).await?,
        today_completions: count_completed_on_date(db, user, today).await?,
    })
}
