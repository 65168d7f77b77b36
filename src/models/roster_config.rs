use crate::models::month_key::MonthKey;

/// Inputs of one auto-scheduling run.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub month_key: MonthKey,
    /// Ordered rotation list. When `explicit_names` is false the list was
    /// read from the roster sheet and cross-month continuation applies.
    pub personnel: Vec<String>,
    /// Ordered leader rotation, reset to the first entry every Monday.
    pub leaders: Vec<String>,
    /// Optional rotation anchor: scheduling starts at the first personnel
    /// entry matching this name, bypassing continuation.
    pub start_name: Option<String>,
    /// True when `personnel` was supplied by the caller as a full override
    /// list instead of being read from the roster sheet.
    pub explicit_names: bool,
}
