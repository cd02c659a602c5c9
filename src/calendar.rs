//! Timestamp ⇄ calendar-field conversion.
//!
//! Deliberately not a standards-compliant calendar: a year is a flat
//! 31,536,000 seconds and one extra day is inserted per 4 elapsed years,
//! with no century exceptions. Bucket boundaries stored on chain were
//! produced by this exact arithmetic, so it must stay bit-for-bit stable.

use crate::constants::{MONTH_LENGTHS, SECONDS_PER_DAY, SECONDS_PER_YEAR};

/// Transient decomposition of a timestamp; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: u64,
    pub day_of_year: u64,
    /// 0-based month index; stays 0 when the month walk does not resolve.
    pub month: u64,
    /// 1-based within the month; stays 0 when the month walk does not resolve.
    pub day_of_month: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
}

pub fn timestamp_to_fields(timestamp: u64) -> CalendarFields {
    let elapsed_years = timestamp / SECONDS_PER_YEAR;
    let leap_days = elapsed_years / 4;

    let mut remaining = timestamp - leap_days * SECONDS_PER_DAY;

    let year = 1970 + remaining / SECONDS_PER_YEAR;
    remaining %= SECONDS_PER_YEAR;

    let day_of_year = remaining / SECONDS_PER_DAY;
    remaining %= SECONDS_PER_DAY;

    let hour = remaining / 3600;
    remaining %= 3600;

    let minute = remaining / 60;
    let second = remaining % 60;

    // Walk the first 11 months only; a day count that never satisfies the
    // strict comparison leaves month and day-of-month at zero.
    let mut month = 0;
    let mut day_of_month = 0;
    let mut days_left = day_of_year + 1;
    for (index, length) in MONTH_LENGTHS.iter().enumerate().take(11) {
        if days_left < *length {
            month = index as u64;
            day_of_month = days_left;
            break;
        }
        days_left -= length;
    }

    CalendarFields {
        year,
        day_of_year,
        month,
        day_of_month,
        hour,
        minute,
        second,
    }
}

/// Inverse of [`timestamp_to_fields`], reconstituting seconds from elapsed
/// years, the leap-day count, day-of-year and h:m:s. Month and day-of-month
/// are intentionally ignored; round-trips are exact only for fields produced
/// by this engine.
pub fn fields_to_timestamp(fields: &CalendarFields) -> u64 {
    let elapsed_years = fields.year - 1970;
    let leap_days = elapsed_years / 4;

    elapsed_years * SECONDS_PER_YEAR
        + leap_days * SECONDS_PER_DAY
        + fields.day_of_year * SECONDS_PER_DAY
        + fields.hour * 3600
        + fields.minute * 60
        + fields.second
}
