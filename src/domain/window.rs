//! Trailing time windows for analytics rankings.
//!
//! A window is written as `<integer><unit>` where the unit is one of
//! `s`, `m`, `h` or `d`. Surrounding whitespace and letter case are ignored,
//! so `" 24H "` and `"24h"` describe the same window.

use chrono::{DateTime, Datelike, TimeDelta, Utc};

/// Example formats quoted in every parse error.
pub const ACCEPTED_FORMATS: &str = "7d, 24h, 30m, 10s";

/// Earliest year a window may start in (4713 BC, astronomical numbering).
///
/// PostgreSQL `timestamptz` cannot hold anything older, so a start before
/// this year could never be bound as a query parameter.
pub const EARLIEST_START_YEAR: i32 = -4712;

/// Reasons a window string can be rejected.
///
/// Every variant keeps the raw input so callers can report it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("Invalid window '{input}': value is empty. Use formats like {formats}", formats = ACCEPTED_FORMATS)]
    Empty { input: String },

    #[error("Invalid window '{input}': unknown unit. Use formats like {formats}", formats = ACCEPTED_FORMATS)]
    UnknownUnit { input: String },

    #[error("Invalid window '{input}': magnitude is not an integer. Use formats like {formats}", formats = ACCEPTED_FORMATS)]
    InvalidMagnitude { input: String },

    #[error("Invalid window '{input}': magnitude must be greater than zero. Use formats like {formats}", formats = ACCEPTED_FORMATS)]
    NotPositive { input: String },

    #[error("Invalid window '{input}': duration is too large. Use formats like {formats}", formats = ACCEPTED_FORMATS)]
    TooLarge { input: String },
}

impl WindowError {
    /// Returns the raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Empty { input }
            | Self::UnknownUnit { input }
            | Self::InvalidMagnitude { input }
            | Self::NotPositive { input }
            | Self::TooLarge { input } => input,
        }
    }
}

/// The closed set of accepted unit suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl WindowUnit {
    /// Maps a lowercase suffix to its unit.
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            _ => None,
        }
    }

    fn to_delta(self, magnitude: i64) -> Option<TimeDelta> {
        match self {
            Self::Seconds => TimeDelta::try_seconds(magnitude),
            Self::Minutes => TimeDelta::try_minutes(magnitude),
            Self::Hours => TimeDelta::try_hours(magnitude),
            Self::Days => TimeDelta::try_days(magnitude),
        }
    }
}

/// Parses a window string such as `"7d"` into a duration.
///
/// # Errors
///
/// - [`WindowError::Empty`] for blank input
/// - [`WindowError::UnknownUnit`] when the last character is not `s`/`m`/`h`/`d`
/// - [`WindowError::InvalidMagnitude`] when the part before the unit is not a
///   plain decimal integer (signs are not accepted)
/// - [`WindowError::NotPositive`] for a zero magnitude
/// - [`WindowError::TooLarge`] when the duration does not fit a [`TimeDelta`]
pub fn parse_window(input: &str) -> Result<TimeDelta, WindowError> {
    let normalized = input.trim().to_ascii_lowercase();

    let Some(suffix) = normalized.chars().last() else {
        return Err(WindowError::Empty {
            input: input.to_string(),
        });
    };

    let unit = WindowUnit::from_suffix(suffix).ok_or_else(|| WindowError::UnknownUnit {
        input: input.to_string(),
    })?;

    let magnitude = normalized[..normalized.len() - suffix.len_utf8()].trim();
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WindowError::InvalidMagnitude {
            input: input.to_string(),
        });
    }

    // Only digits remain, so a parse failure can only be an overflow.
    let magnitude: i64 = magnitude.parse().map_err(|_| WindowError::TooLarge {
        input: input.to_string(),
    })?;

    if magnitude == 0 {
        return Err(WindowError::NotPositive {
            input: input.to_string(),
        });
    }

    unit.to_delta(magnitude).ok_or_else(|| WindowError::TooLarge {
        input: input.to_string(),
    })
}

/// Computes the lower bound of a trailing window ending at `now`.
///
/// # Errors
///
/// Propagates [`parse_window`] errors, and returns [`WindowError::TooLarge`]
/// when the window starts before [`EARLIEST_START_YEAR`].
pub fn window_start(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, WindowError> {
    let window = parse_window(input)?;

    now.checked_sub_signed(window)
        .filter(|start| start.year() >= EARLIEST_START_YEAR)
        .ok_or_else(|| WindowError::TooLarge {
            input: input.to_string(),
        })
}
