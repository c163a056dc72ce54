use serde::{Deserialize, Serialize};

/// A user's free-text reflection for one day
///
/// All fields may be empty. A missing row reads back as [`Reflection::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub win: String,
    pub stress_shift: String,
    pub note: String,
}

impl Reflection {
    pub fn new(win: &str, stress_shift: &str, note: &str) -> Self {
        Self {
            win: win.to_string(),
            stress_shift: stress_shift.to_string(),
            note: note.to_string(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self::new(self.win.trim(), self.stress_shift.trim(), self.note.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.win.is_empty() && self.stress_shift.is_empty() && self.note.is_empty()
    }
}
