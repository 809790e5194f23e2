//! # Interview Slot Generation
//!
//! Tiles a single-day time window into consecutive fixed-length segments and
//! emits one [`Slot`] per segment and parallel panel.
//!
//! The generator is a pure function: it reads the request, returns either the
//! full slot list or an [`InvalidRangeError`], and touches no shared state.
//! Callers own previewing, publishing and notifying.
//!
//! ## Ordering
//!
//! Slots are ordered by segment start, then by ascending panel index. A
//! trailing remainder shorter than one segment is dropped rather than emitted
//! as a partial slot.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::debug;

use crate::models::slot::{Slot, SlotRequest, SlotStatus};

/// Upper bound on the slots a single request may produce.
pub const MAX_SLOTS: usize = 20_000;

/// The single failure mode of slot generation: missing, unparseable or
/// inverted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid slot range: {reason}")]
pub struct InvalidRangeError {
    reason: String,
}

impl InvalidRangeError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Generates slots with local times interpreted in UTC unless the request
/// names a zone.
pub fn generate_slots(request: &SlotRequest) -> Result<Vec<Slot>, InvalidRangeError> {
    generate_slots_in(request, chrono_tz::UTC)
}

/// Generates slots, interpreting local times in `default_tz` when the request
/// carries no zone of its own.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] when the date or either time is missing or
/// unparseable, the zone is unknown, a local time does not map to exactly one
/// instant, the start is not strictly before the end, the duration or panel
/// count is zero, or the request would produce more than [`MAX_SLOTS`] slots.
pub fn generate_slots_in(
    request: &SlotRequest,
    default_tz: Tz,
) -> Result<Vec<Slot>, InvalidRangeError> {
    let window = SlotWindow::resolve(request, default_tz)?;
    let step = Duration::minutes(i64::from(request.duration_minutes));

    let segments = (window.end - window.start).num_seconds() / step.num_seconds();
    let total = u64::try_from(segments)
        .ok()
        .and_then(|s| s.checked_mul(u64::from(request.panel_count)))
        .filter(|&total| total <= MAX_SLOTS as u64)
        .ok_or_else(|| {
            InvalidRangeError::new(format!(
                "{} panels of {} minute slots exceed the limit of {} slots",
                request.panel_count, request.duration_minutes, MAX_SLOTS
            ))
        })?;
    let mut slots = Vec::with_capacity(total as usize);

    let mut cursor = window.start;
    while cursor + step <= window.end {
        let segment_end = cursor + step;
        for panel_index in 1..=request.panel_count {
            slots.push(Slot {
                id: slot_id(window.date, cursor, panel_index),
                start_time: cursor,
                end_time: segment_end,
                panel_index,
                status: SlotStatus::Available,
            });
        }
        cursor = segment_end;
    }

    debug!(
        date = %window.date,
        slots = slots.len(),
        panels = request.panel_count,
        "Generated interview slots"
    );

    Ok(slots)
}

/// Stable identifier for the slot of `panel_index` starting at `start`.
pub fn slot_id(date: NaiveDate, start: DateTime<Utc>, panel_index: u32) -> String {
    format!(
        "{}-{}-{}",
        date.format("%Y-%m-%d"),
        start.timestamp_millis(),
        panel_index
    )
}

/// Validated absolute bounds of a request.
struct SlotWindow {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl SlotWindow {
    fn resolve(request: &SlotRequest, default_tz: Tz) -> Result<Self, InvalidRangeError> {
        let date = parse_date(&request.date)?;
        let start_time = parse_time("start time", &request.start_time)?;
        let end_time = parse_time("end time", &request.end_time)?;

        if request.duration_minutes == 0 {
            return Err(InvalidRangeError::new("slot duration must be positive"));
        }
        if request.panel_count == 0 {
            return Err(InvalidRangeError::new("panel count must be at least 1"));
        }

        let tz = match request.timezone.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name
                .parse::<Tz>()
                .map_err(|_| InvalidRangeError::new(format!("unknown timezone '{}'", name)))?,
            _ => default_tz,
        };

        let start = to_instant(tz, date.and_time(start_time))?;
        let end = to_instant(tz, date.and_time(end_time))?;

        if start >= end {
            return Err(InvalidRangeError::new(format!(
                "start time {} must be before end time {}",
                request.start_time.trim(),
                request.end_time.trim()
            )));
        }

        Ok(Self { date, start, end })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, InvalidRangeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidRangeError::new("date is required"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| InvalidRangeError::new(format!("invalid date '{}'", raw)))
}

fn parse_time(field: &str, raw: &str) -> Result<NaiveTime, InvalidRangeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidRangeError::new(format!("{} is required", field)));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| InvalidRangeError::new(format!("invalid {} '{}'", field, raw)))
}

fn to_instant(tz: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>, InvalidRangeError> {
    tz.from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            InvalidRangeError::new(format!("{} does not exist exactly once in {}", local, tz))
        })
}
