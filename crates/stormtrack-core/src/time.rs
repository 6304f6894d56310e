//! UTC → EST display strings for track and landfall timestamps.
//!
//! Sources record `YYYYMMDD` dates and `HHMM` UTC times. The display form is
//! `MM/DD/YYYY h:mm AM EST` using a fixed UTC−5 offset all year round: no
//! daylight-saving adjustment is ever applied, and when the shifted hour
//! wraps below midnight only the hour wraps, the date field is left as-is.
//! Consumers downstream may already compensate for both, so neither is
//! corrected here.

use thiserror::Error;

/// Returned in place of a display string when a record's date or time
/// cannot be used.
pub const INVALID_DATE_TIME: &str = "Invalid Date/Time";

/// Fixed offset applied to every UTC hour.
pub const EST_OFFSET_HOURS: i32 = -5;

/// Why a date/time pair could not be turned into an [`EstStamp`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StampError {
    #[error("date is missing")]
    MissingDate,
    #[error("time is missing")]
    MissingTime,
    #[error("hour {0:?} is not a UTC hour")]
    BadHour(String),
}

/// A source timestamp shifted to EST, kept as display components.
///
/// Month, day, year, and minute are the literal substrings of the source
/// fields; no calendar validation happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstStamp {
    pub year: String,
    pub month: String,
    pub day: String,
    /// EST hour, 0–23.
    pub hour: u8,
    pub minute: String,
}

impl EstStamp {
    pub fn parse(date: Option<&str>, time: Option<&str>) -> Result<Self, StampError> {
        let date = date.filter(|d| !d.is_empty()).ok_or(StampError::MissingDate)?;
        let time = time.filter(|t| !t.is_empty()).ok_or(StampError::MissingTime)?;

        let hour_text = substring(time, 0, 2);
        if hour_text.is_empty() || !hour_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StampError::BadHour(hour_text.to_string()));
        }
        let utc_hour: i32 = hour_text
            .parse()
            .map_err(|_| StampError::BadHour(hour_text.to_string()))?;
        if utc_hour > 23 {
            return Err(StampError::BadHour(hour_text.to_string()));
        }

        let mut est_hour = utc_hour + EST_OFFSET_HOURS;
        if est_hour < 0 {
            est_hour += 24;
        }

        Ok(Self {
            year: substring(date, 0, 4).to_string(),
            month: substring(date, 4, 6).to_string(),
            day: substring(date, 6, 8).to_string(),
            hour: est_hour as u8,
            minute: substring(time, 2, 4).to_string(),
        })
    }

    /// Hour on a 12-hour clock: 0 and 12 both display as 12.
    pub fn display_hour(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn meridiem(&self) -> &'static str {
        if self.hour < 12 {
            "AM"
        } else {
            "PM"
        }
    }
}

impl std::fmt::Display for EstStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{} {}:{} {} EST",
            self.month,
            self.day,
            self.year,
            self.display_hour(),
            self.minute,
            self.meridiem()
        )
    }
}

/// Format a source date/time pair for display, or [`INVALID_DATE_TIME`].
///
/// Never fails: a bad record degrades to the sentinel on its own.
pub fn normalize(date: Option<&str>, time: Option<&str>) -> String {
    match EstStamp::parse(date, time) {
        Ok(stamp) => stamp.to_string(),
        Err(err) => {
            tracing::debug!(?date, ?time, %err, "unusable date/time");
            INVALID_DATE_TIME.to_string()
        }
    }
}

/// [`normalize`] for fields that are always present (possibly empty).
pub fn normalize_str(date: &str, time: &str) -> String {
    normalize(Some(date), Some(time))
}

/// Character-indexed slice that clamps out-of-range bounds to the string's
/// end instead of panicking.
fn substring(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let (from, to) = (byte_at(start), byte_at(end));
    if from >= to {
        ""
    } else {
        &s[from..to]
    }
}
