use chrono::NaiveDate;

/// `2024-04-26` becomes `April 26 2024`. Anything that is not an ISO
/// calendar date is returned unchanged.
pub fn format_release_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %d %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
