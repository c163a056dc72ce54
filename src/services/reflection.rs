//! Daily reflections: one free-text entry per user per day.

use chrono::{NaiveDate, Utc};

use crate::db::Db;
use crate::error::Result;
use crate::models::user::require_label;
use crate::models::Reflection;

/// Save the user's reflection for `log_date`, replacing any earlier one
///
/// All three fields are replaced together; pass the current values for any
/// field that should stay the same.
pub async fn save_reflection(
    db: &Db,
    user: &str,
    log_date: NaiveDate,
    reflection: &Reflection,
) -> Result<()> {
    let user = require_label(user)?;
    let reflection = reflection.trimmed();

    sqlx::query(
        r#"
        INSERT INTO daily_reflections (log_date, author, win, stress_shift, note, recorded_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(log_date, author) DO UPDATE SET
            win = excluded.win,
            stress_shift = excluded.stress_shift,
            note = excluded.note,
            recorded_at = excluded.recorded_at
        "#,
    )
    .bind(log_date)
    .bind(&user)
    .bind(&reflection.win)
    .bind(&reflection.stress_shift)
    .bind(&reflection.note)
    .bind(Utc::now())
    .execute(db)
    .await?;

    tracing::info!("Reflection saved for {} on {}", user, log_date);

    Ok(())
}

/// The user's reflection for `log_date`, or all-empty fields if none was saved
pub async fn get_reflection(db: &Db, user: &str, log_date: NaiveDate) -> Result<Reflection> {
    let user = require_label(user)?;

    let row: Option<(Option<String>, Option<String>, Option<String>)> = sqlx::query_as(
        r#"
        SELECT win, stress_shift, note
        FROM daily_reflections
        WHERE author = ? AND log_date = ?
        "#,
    )
    .bind(&user)
    .bind(log_date)
    .fetch_optional(db)
    .await?;

    Ok(row
        .map(|(win, stress_shift, note)| Reflection {
            win: win.unwrap_or_default(),
            stress_shift: stress_shift.unwrap_or_default(),
            note: note.unwrap_or_default(),
        })
        .unwrap_or_default())
}
