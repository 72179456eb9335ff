use chrono::NaiveDateTime;

/// One line of the in-memory activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: NaiveDateTime,
    pub operation: String,
    pub target: String,
    pub message: String,
}
