use chrono::{Datelike, NaiveDate};

/// Key of a per-month sheet inside the roster document.
///
/// The canonical textual form is `"m-yyyy"` without zero padding (`8-2025`);
/// legacy documents sometimes carry a zero-padded variant (`08-2025`) which
/// must also be accepted when resolving a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub month: u32,
    pub year: i32,
}

impl MonthKey {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Parse `"m-yyyy"` or `"mm-yyyy"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (m, y) = s.trim().split_once('-')?;
        let month: u32 = m.parse().ok()?;
        let year: i32 = y.parse().ok()?;
        if !(1..=12).contains(&month) || y.len() != 4 {
            return None;
        }
        Some(Self { month, year })
    }

    /// Canonical sheet name, no zero padding: `8-2025`.
    pub fn canonical(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }

    /// Zero-padded alternate sheet name: `08-2025`.
    pub fn padded(&self) -> String {
        format!("{:02}-{}", self.month, self.year)
    }

    /// The previous calendar month, wrapping January back to December.
    pub fn prev(&self) -> Self {
        if self.month > 1 {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        } else {
            Self {
                month: 12,
                year: self.year - 1,
            }
        }
    }

    /// Monotonic index used to sort keys chronologically.
    pub fn sort_index(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        let next = Self {
            month: if self.month == 12 { 1 } else { self.month + 1 },
            year: if self.month == 12 {
                self.year + 1
            } else {
                self.year
            },
        };
        let next_first = NaiveDate::from_ymd_opt(next.year, next.month, 1).unwrap();
        (next_first - first).num_days() as u32
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}
