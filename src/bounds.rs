//! Bucket boundary arithmetic: canonical start-of-bucket rounding and
//! bucket membership tests. Pure functions; the current-week scheme flag is
//! threaded through explicitly so one operation's cascade sees a single
//! consistent snapshot.

use crate::{
    calendar,
    constants::LEGACY_TIME_BIAS_SECONDS,
    structs::Granularity,
};

/// Rounds `now` down to the canonical bucket start for `granularity`.
///
/// While the current-week scheme is not active, a fixed 20-day bias is added
/// to `now` before rounding; pre-migration bucket timestamps were produced
/// with this offset and membership tests must keep lining up with them.
pub fn bucket_start(granularity: Granularity, now: u64, current_week_scheme_active: bool) -> u64 {
    let adjusted_now = if current_week_scheme_active {
        now
    } else {
        now + LEGACY_TIME_BIAS_SECONDS
    };

    if granularity == Granularity::Month && current_week_scheme_active {
        return calendar_month_start(adjusted_now);
    }

    let duration = granularity.fixed_duration_seconds();
    adjusted_now - adjusted_now % duration
}

/// Calendar-based month start: zero out the time-of-day fields and force the
/// day-of-month to 1, then convert back through the calendar engine.
fn calendar_month_start(timestamp: u64) -> u64 {
    let mut fields = calendar::timestamp_to_fields(timestamp);
    fields.second = 0;
    fields.minute = 0;
    fields.hour = 0;
    fields.day_of_month = 1;
    calendar::fields_to_timestamp(&fields)
}

/// Whether `candidate` falls inside the bucket starting at `bucket_start`.
///
/// For fixed-duration granularities `use_previous` shifts the candidate back
/// by one bucket duration before the range test. For `Month` under the
/// active scheme the test is same-calendar-month (equal year and month, with
/// the bucket's day-of-month not after the candidate's); that path does not
/// shift the candidate.
pub fn is_within_bucket(
    granularity: Granularity,
    bucket_start: u64,
    candidate: u64,
    use_previous: bool,
    current_week_scheme_active: bool,
) -> bool {
    if granularity == Granularity::Month && current_week_scheme_active {
        return is_same_calendar_month(bucket_start, candidate);
    }

    let duration = granularity.fixed_duration_seconds() as i128;
    let mut selected = candidate as i128;
    if use_previous {
        selected -= duration;
    }
    let start = bucket_start as i128;
    start <= selected && selected < start + duration
}

fn is_same_calendar_month(bucket_start: u64, candidate: u64) -> bool {
    let start_fields = calendar::timestamp_to_fields(bucket_start);
    let candidate_fields = calendar::timestamp_to_fields(candidate);

    start_fields.year == candidate_fields.year
        && start_fields.month == candidate_fields.month
        && start_fields.day_of_month <= candidate_fields.day_of_month
}
