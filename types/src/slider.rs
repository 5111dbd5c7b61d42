//! The date-selection control: its bounds and the day-offset mapping an
//! HTML range input works in.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::DateParseError;

/// Format shown next to the slider.
pub const DISPLAY_FORMAT: &str = "YYYY-MM-DD";

const CHRONO_FORMAT: &str = "%Y-%m-%d";

/// The slider opens this many days before the first invasion.
pub const LEAD_IN_DAYS: u64 = 365;

pub fn format_date(date: NaiveDate) -> String {
    date.format(CHRONO_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), CHRONO_FORMAT).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// Bounds and defaults for the date slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderConfig {
    pub min: NaiveDate,
    pub max: NaiveDate,
    pub default: NaiveDate,
    pub step_days: u32,
    pub display_format: &'static str,
}

impl SliderConfig {
    /// Slider spanning `[first_start - LEAD_IN_DAYS, last_end]`, starting at
    /// its minimum.
    pub fn spanning(first_start: NaiveDate, last_end: NaiveDate) -> Self {
        let min = first_start
            .checked_sub_days(Days::new(LEAD_IN_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self {
            min,
            max: last_end.max(min),
            default: min,
            step_days: 1,
            display_format: DISPLAY_FORMAT,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Number of steps between `min` and `max`.
    pub fn span_days(&self) -> i64 {
        (self.max - self.min).num_days()
    }

    /// Day offset of `date` from `min`, after clamping.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (self.clamp(date) - self.min).num_days()
    }

    /// Inverse of [`offset_of`](Self::offset_of). Offsets outside
    /// `0..=span_days()` land on the nearest bound.
    pub fn date_at(&self, offset: i64) -> NaiveDate {
        let offset = offset.clamp(0, self.span_days());
        // offset is non-negative and within the span, so this cannot overflow
        self.min
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn war_slider() -> SliderConfig {
        SliderConfig::spanning(date("1938-03-12"), date("1945-05-08"))
    }

    #[test]
    fn test_spanning_leads_in_one_year() {
        let s = war_slider();
        assert_eq!(s.min, date("1937-03-12"));
        assert_eq!(s.max, date("1945-05-08"));
        assert_eq!(s.default, s.min);
        assert_eq!(s.step_days, 1);
        assert_eq!(s.display_format, "YYYY-MM-DD");
    }

    #[test]
    fn test_clamp_out_of_range() {
        let s = war_slider();
        assert_eq!(s.clamp(date("1900-01-01")), s.min);
        assert_eq!(s.clamp(date("1950-01-01")), s.max);
        assert_eq!(s.clamp(date("1940-05-10")), date("1940-05-10"));
    }

    #[test]
    fn test_offsets_cover_whole_range() {
        let s = war_slider();
        assert_eq!(s.offset_of(s.min), 0);
        assert_eq!(s.offset_of(s.max), s.span_days());
        assert_eq!(s.date_at(-5), s.min);
        assert_eq!(s.date_at(s.span_days() + 10), s.max);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("1940-13-01").is_err());
        assert!(parse_date("10/05/1940").is_err());
        assert_eq!(
            parse_date("nope").unwrap_err().to_string(),
            "expected a YYYY-MM-DD date, got \"nope\""
        );
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(date("1940-05-10")), "1940-05-10");
    }

    proptest! {
        #[test]
        fn clamped_dates_are_always_in_range(days in -40_000i64..40_000) {
            let s = war_slider();
            let d = s.min + chrono::Duration::days(days);
            let c = s.clamp(d);
            prop_assert!(s.contains(c));
            if s.contains(d) {
                prop_assert_eq!(c, d);
            }
        }

        #[test]
        fn offset_round_trips_inside_range(offset in 0i64..3000) {
            let s = war_slider();
            let offset = offset.min(s.span_days());
            prop_assert_eq!(s.offset_of(s.date_at(offset)), offset);
        }
    }
}
