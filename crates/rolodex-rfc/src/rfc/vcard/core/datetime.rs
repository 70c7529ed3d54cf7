//! Partial dates for BDAY (RFC 6350 §4.3.1).

use chrono::NaiveDate;

use super::error::{VCardError, VCardResult};
use super::value::Value;

/// Year used to validate month/day pairs when no year is given; a leap year
/// so that `--0229` is accepted.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A date whose year, month and day may each be omitted.
///
/// Year without month but with day is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StructuredDate {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
}

impl StructuredDate {
    pub const MAX_YEAR: u16 = 9999;

    /// ## Errors
    /// Returns [`VCardError::InvalidDate`] when a field is out of range, the
    /// day does not exist in the month, or year and day are set without a
    /// month.
    pub fn new(year: Option<u16>, month: Option<u8>, day: Option<u8>) -> VCardResult<Self> {
        let date = Self { year, month, day };
        let invalid = || VCardError::InvalidDate(date.describe());

        if year.is_some_and(|y| y > Self::MAX_YEAR)
            || month.is_some_and(|m| !(1..=12).contains(&m))
            || day.is_some_and(|d| !(1..=31).contains(&d))
        {
            return Err(invalid());
        }

        match (year, month, day) {
            (Some(_), None, Some(_)) => return Err(invalid()),
            (_, Some(m), Some(d)) => {
                let y = year.map_or(REFERENCE_LEAP_YEAR, i32::from);
                if NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(d)).is_none() {
                    return Err(invalid());
                }
            }
            _ => {}
        }

        Ok(date)
    }

    #[must_use]
    pub const fn year(&self) -> Option<u16> {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Option<u8> {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> Option<u8> {
        self.day
    }

    fn describe(&self) -> String {
        let field = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        format!(
            "year={} month={} day={}",
            field(self.year.map(u32::from)),
            field(self.month.map(u32::from)),
            field(self.day.map(u32::from))
        )
    }
}

impl Value for StructuredDate {
    fn render(&self) -> String {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => format!("{y:04}{m:02}{d:02}"),
            (Some(y), Some(m), None) => format!("{y:04}-{m:02}"),
            (Some(y), None, _) => format!("{y:04}"),
            (None, Some(m), Some(d)) => format!("--{m:02}{d:02}"),
            (None, Some(m), None) => format!("--{m:02}"),
            (None, None, Some(d)) => format!("---{d:02}"),
            (None, None, None) => String::new(),
        }
    }

    fn element_count(&self) -> usize {
        usize::from(self.year.is_some() || self.month.is_some() || self.day.is_some())
    }
}
