use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    today().succ_opt().unwrap()
}

/// CLI dates are `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Display form used inside the roster document and the audit log.
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Parse a textual date cell. Legacy documents mix day-first and year-first
/// encodings; anything else is treated as a non-matching value by callers.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    for fmt in ["%d/%m/%Y", "%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d);
        }
    }
    None
}
