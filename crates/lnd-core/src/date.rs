use libs::chrono::{DateTime, NaiveDate};

/// Parses the date formats frontmatter is allowed to carry: `YYYY`,
/// `YYYY-MM`, `YYYY-MM-DD` and full RFC 3339 timestamps.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.date_naive());
    }

    let pieces: Vec<&str> = input.split('-').collect();
    match pieces[..] {
        [year] => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        [year, month] => NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1),
        _ => None,
    }
}
