//! # Calendar Export
//!
//! Renders booked interviews and drive events as iCalendar documents and as
//! Google Calendar "add event" links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{drive::Drive, slot::Slot};

const PRODID: &str = "-//Placement Portal//Interview Slots//EN";
const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub uid: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// Event for an interview held in `slot` of `drive`.
    pub fn for_slot(drive: &Drive, slot: &Slot) -> Self {
        Self {
            uid: format!("{}-{}@placement-portal", drive.id, slot.id),
            title: format!("Interview: {} - {}", drive.company_name, drive.role),
            description: format!(
                "Panel {} interview for {} at {}",
                slot.panel_index, drive.role, drive.company_name
            ),
            location: drive.location.clone(),
            start: slot.start_time,
            end: slot.end_time,
        }
    }

    /// File name offered for download: words joined by underscores, other
    /// punctuation dropped.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        format!("{}.ics", stem)
    }
}

/// UTC basic format, e.g. `20251210T090000Z`.
fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders a single-event VCALENDAR with CRLF line endings. `stamp` becomes
/// the DTSTAMP.
pub fn to_ics(event: &CalendarEvent, stamp: DateTime<Utc>) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTAMP:{}", format_instant(stamp)),
        format!("DTSTART:{}", format_instant(event.start)),
        format!("DTEND:{}", format_instant(event.end)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        format!(
            "LOCATION:{}",
            escape_text(event.location.as_deref().unwrap_or("TBD"))
        ),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];
    let mut ics = lines.join("\r\n");
    ics.push_str("\r\n");
    ics
}

pub fn google_calendar_url(event: &CalendarEvent) -> String {
    format!(
        "{}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        GOOGLE_CALENDAR_BASE,
        urlencoding::encode(&event.title),
        format_instant(event.start),
        format_instant(event.end),
        urlencoding::encode(&event.description),
        urlencoding::encode(event.location.as_deref().unwrap_or("")),
    )
}
