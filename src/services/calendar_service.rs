use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::CalendarEvent;

// "June 5, 2025: Apply first irrigation"
fn dated_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\w+\s\d{1,2},\s\d{4}):\s*(.*)").expect("calendar line regex is valid")
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%b %d, %Y"))
        .ok()
}

/// Pulls dated tasks out of generated calendar text, one per matching line,
/// in text order. Lines without a readable date are skipped.
pub fn parse_calendar_events(text: &str) -> Vec<CalendarEvent> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let caps = dated_line().captures(line)?;
            let date = parse_date(&caps[1])?;
            Some(CalendarEvent {
                date,
                title: caps[2].trim().to_string(),
            })
        })
        .collect()
}
