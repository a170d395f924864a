//! Playback time labels.
//!
//! A [`TimeLabel`] is the `MM:SS` or `HH:MM:SS` text shown next to a seek
//! bar. Input seconds are floored (toward negative infinity) before being
//! split into hours, minutes and seconds, so `59.9` and `59.0` render the
//! same. The hours segment only appears once the value reaches one hour and
//! is padded to a minimum of two digits, never truncated (`100:00:00`).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{ModelError, ModelResult, NegativePolicy};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Decomposed, display-ready playback time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeLabel {
    negative: bool,
    hours: Option<u64>,
    minutes: u8,
    seconds: u8,
}

impl TimeLabel {
    /// Builds a label from a possibly fractional number of seconds.
    ///
    /// Non-finite input is rejected with [`ModelError::InvalidDuration`].
    /// Finite values outside the `i64` range saturate before decomposition.
    pub fn from_seconds(
        seconds: f64,
        policy: NegativePolicy,
    ) -> ModelResult<Self> {
        if !seconds.is_finite() {
            return Err(ModelError::InvalidDuration(seconds));
        }

        // `as` saturates for out-of-range floats
        let whole = seconds.floor() as i64;
        if whole >= 0 {
            return Ok(Self::from_whole_seconds(whole as u64));
        }

        Ok(match policy {
            NegativePolicy::Clamp => Self::from_whole_seconds(0),
            NegativePolicy::Signed => Self {
                negative: true,
                ..Self::from_whole_seconds(whole.unsigned_abs())
            },
        })
    }

    /// Builds a label from an integral, non-negative number of seconds.
    pub fn from_whole_seconds(total: u64) -> Self {
        let hours = total / SECS_PER_HOUR;
        let minutes = (total / SECS_PER_MINUTE) % 60;
        let seconds = total % SECS_PER_MINUTE;

        Self {
            negative: false,
            hours: (hours > 0).then_some(hours),
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    /// Whole hours, `0` when the hours segment is omitted.
    pub fn hours(&self) -> u64 {
        self.hours.unwrap_or(0)
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn has_hours(&self) -> bool {
        self.hours.is_some()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude of the label in whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.hours()
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add(u64::from(self.minutes) * SECS_PER_MINUTE)
            .saturating_add(u64::from(self.seconds))
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if let Some(hours) = self.hours {
            write!(f, "{hours:02}:")?;
        }
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl From<Duration> for TimeLabel {
    fn from(duration: Duration) -> Self {
        Self::from_whole_seconds(duration.as_secs())
    }
}

impl FromStr for TimeLabel {
    type Err = ModelError;

    /// Parses the exact text [`Display`](fmt::Display) produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidLabel(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let parts: Vec<&str> = body.split(':').collect();
        let (hours, minutes, seconds) = match parts.as_slice() {
            [min, sec] => (None, *min, *sec),
            [hr, min, sec] => (Some(*hr), *min, *sec),
            _ => return Err(invalid()),
        };

        let segment = |raw: &str| -> Option<u64> {
            if raw.len() < 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            raw.parse().ok()
        };

        let hours = match hours {
            Some(raw) => {
                Some(segment(raw).filter(|h| *h > 0).ok_or_else(invalid)?)
            }
            None => None,
        };
        let minutes = segment(minutes)
            .filter(|m| minutes.len() == 2 && *m < 60)
            .ok_or_else(invalid)?;
        let seconds = segment(seconds)
            .filter(|s| seconds.len() == 2 && *s < 60)
            .ok_or_else(invalid)?;

        let label = Self {
            negative,
            hours,
            minutes: minutes as u8,
            seconds: seconds as u8,
        };

        // Reject anything the formatter would never emit: `00:` hours,
        // extra leading zeros, or `-00:00`.
        if label.to_string() != s || (negative && label.total_seconds() == 0)
        {
            return Err(invalid());
        }
        Ok(label)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats `seconds` as `MM:SS` or `HH:MM:SS` using the default
/// [`NegativePolicy`].
pub fn format_seconds(seconds: f64) -> ModelResult<String> {
    format_seconds_with(seconds, NegativePolicy::default())
}

/// Formats `seconds` with an explicit [`NegativePolicy`].
pub fn format_seconds_with(
    seconds: f64,
    policy: NegativePolicy,
) -> ModelResult<String> {
    TimeLabel::from_seconds(seconds, policy).map(|label| label.to_string())
}

/// Infallible variant for integral sources such as container metadata.
pub fn format_whole_seconds(total: u64) -> String {
    TimeLabel::from_whole_seconds(total).to_string()
}
