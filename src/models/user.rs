use crate::constants::{ERR_MISSING_LABEL, MAX_LABEL_LEN};
use crate::error::{AppError, Result};

/// Normalize a free-text nickname into a short, safe identity label
///
/// Surrounding whitespace is trimmed, internal whitespace runs collapse to a
/// single space, characters outside `[A-Za-z0-9 _-]` are dropped and the
/// result is cut to [`MAX_LABEL_LEN`] characters. Never fails; an empty result
/// means "no identity".
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let cleaned: String = collapsed
        .chars()
        .filter(|c| is_label_char(*c))
        .take(MAX_LABEL_LEN)
        .collect();

    // Stripping or truncation can leave a space at either end
    cleaned.trim().to_string()
}

/// Normalize a label and reject it when nothing usable is left
pub fn require_label(raw: &str) -> Result<String> {
    let label = normalize(raw);
    if label.is_empty() {
        tracing::warn!("Rejected request without a usable nickname");
        return Err(AppError::validation(ERR_MISSING_LABEL));
    }
    Ok(label)
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-'
}
