use chrono::NaiveDate;
use serde::Serialize;

/// One dated task pulled out of a generated crop calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
}
