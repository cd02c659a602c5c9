pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = SECONDS_PER_DAY * 7;
/// 365-day year; leap days are accounted separately, one per 4 elapsed years.
pub const SECONDS_PER_YEAR: u64 = SECONDS_PER_DAY * 365;
/// Fixed 4-week month window, used for `Month` buckets while the
/// current-week scheme is not active.
pub const SECONDS_PER_FIXED_MONTH: u64 = SECONDS_PER_WEEK * 4;

/// Pre-migration deployments rounded bucket boundaries with this offset
/// added to the clock. Kept for continuity with stored bucket timestamps;
/// the migration subtracts it from every bucket once.
pub const LEGACY_TIME_BIAS_SECONDS: u64 = SECONDS_PER_DAY * 20;

/// Timestamp value of a bucket slot that has never been written.
pub const NULL_TIMESTAMP: u64 = 0;

pub const MONTH_LENGTHS: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const SUBMISSION_LIST_MIN_LEN: usize = 1;
pub const SUBMISSION_LIST_MAX_LEN: usize = 50;
pub const MAX_ROUND_DURATION_SECONDS: u64 = 1800;
pub const FIRST_SUBMISSION_TIMESTAMP_MAX_DIFF_SECONDS: u64 = 30;

/// Upper bound on the configurable daily-point ring capacity; sized so the
/// whole ring fits in a stack-allocated scratch vector when averaging.
pub const MAX_DAILY_POINTS: usize = 64;
/// A cascade step fans out to at most two coarser granularities and the
/// chain is at most three deep, so the work list stays small.
pub const CARRY_QUEUE_CAPACITY: usize = 8;

pub const DEFAULT_DAILY_POINTS_CAPACITY: usize = 45;
pub const DEFAULT_DAILY_ROLLUP_COOLDOWN_SECONDS: u64 = 3600;
