use crate::store::layout;
use serde::Serialize;

/// One of the two duty slots of a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shift {
    Morning,
    Afternoon,
}

impl Shift {
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        }
    }

    /// Column index of this shift inside a month sheet.
    pub fn column(&self) -> usize {
        match self {
            Shift::Morning => layout::COL_MORNING,
            Shift::Afternoon => layout::COL_AFTERNOON,
        }
    }

    /// Convert enum → audit DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Helper: convert input code from CLI (long form or single letter).
    /// Anything else is a validation error handled by the caller.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "morning" | "m" | "am" => Some(Shift::Morning),
            "afternoon" | "a" | "pm" => Some(Shift::Afternoon),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
