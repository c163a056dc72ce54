/// Maximum length of a normalized user label (nickname)
pub const MAX_LABEL_LEN: usize = 20;

/// Canonical calendar date format used for log dates
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Category value meaning "no category filter" when browsing posts
pub const ALL_CATEGORIES: &str = "All";

/// Categories a discussion post may be filed under
pub const BOARD_CATEGORIES: &[&str] = &[
    "Behaviour & classroom management",
    "Project work support",
    "SEN / inclusion",
    "Assessment & reporting",
    "Workload hacks",
    "Pay, leave & entitlements",
    "NQT questions",
    "Wellbeing & balance",
    "Other",
];

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for an empty identity label
pub const ERR_MISSING_LABEL: &str =
    "Please add a nickname to post, reply, or log challenges";

/// Error message for a malformed log date
pub const ERR_INVALID_DATE: &str = "Date must be a valid calendar date (YYYY-MM-DD)";

/// Error message for an empty challenge code
pub const ERR_MISSING_CHALLENGE_CODE: &str = "Challenge code must not be empty";

/// Error message for a post without title or body
pub const ERR_EMPTY_POST: &str = "Please add a title and some text";

/// Error message for an empty reply
pub const ERR_EMPTY_REPLY: &str = "Reply cannot be empty";

/// Error message for an unknown board category
pub const ERR_UNKNOWN_CATEGORY: &str = "Unknown post category";
