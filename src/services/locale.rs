//! Kenyan English (en-KE) locale engine

use chrono::{DateTime, FixedOffset};

use crate::logic::formatting::{self, FormatError};
use crate::traits::LocaleFormatter;

/// East Africa Time, UTC+03:00, no daylight saving
pub const EAST_AFRICA_OFFSET_MINUTES: i32 = 180;

/// en-KE formatter rendering dates in a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct KenyanEnglish {
    offset: FixedOffset,
}

impl KenyanEnglish {
    /// Formatter for East Africa Time
    pub fn new() -> Self {
        Self {
            offset: FixedOffset::east_opt(EAST_AFRICA_OFFSET_MINUTES * 60)
                .expect("UTC+03:00 is within range"),
        }
    }

    /// Formatter rendering dates `minutes` east of UTC
    pub fn with_utc_offset_minutes(minutes: i32) -> Result<Self, FormatError> {
        Ok(Self {
            offset: formatting::offset_from_minutes(minutes)?,
        })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for KenyanEnglish {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleFormatter for KenyanEnglish {
    fn format_currency(&self, amount: f64, currency: &str) -> String {
        formatting::format_currency_en_ke(amount, currency)
    }

    fn format_date(&self, input: &str) -> Result<String, FormatError> {
        let dt = formatting::parse_date_input(input, self.offset)?;
        Ok(formatting::render_date_time(&dt))
    }

    fn format_timestamp_millis(&self, millis: i64) -> Result<String, FormatError> {
        let dt = DateTime::from_timestamp_millis(millis)
            .ok_or(FormatError::InvalidTimestamp(millis))?;
        Ok(formatting::render_date_time(&dt.with_timezone(&self.offset)))
    }
}
