pub static ONLY_ORACLES_ALLOWED_ERROR: &str = "Only oracles allowed";
pub static INVALID_SUBMISSION_COUNT_ERROR: &str = "Invalid submission count";
pub static SUBMISSION_LIST_CAPACITY_EXCEEDED_ERROR: &str = "Submission list capacity exceeded";
pub static TIMESTAMP_FROM_FUTURE_ERROR: &str = "Timestamp is from the future";
pub static FIRST_SUBMISSION_TOO_OLD_ERROR: &str = "First submission too old";
pub static NO_SUBMISSIONS_ERROR: &str = "No submissions";
pub static PAUSED_ERROR: &str = "Contract is paused";

pub static TOKEN_PAIR_NOT_FOUND_ERROR: &str = "Token pair not found";
pub static PAIR_ALREADY_REGISTERED_ERROR: &str = "Pair already registered";
pub static PAIR_NOT_REGISTERED_ERROR: &str = "Pair not registered";
pub static PAIR_DECIMALS_NOT_CONFIGURED_ERROR: &str = "Pair decimals not configured";

pub static ROLLUP_NOT_ACTIVE_ERROR: &str = "Rollup engine not active";
pub static SCHEME_ALREADY_MIGRATED_ERROR: &str = "Current week scheme already active";
pub static DAILY_CAPACITY_TOO_LARGE_ERROR: &str = "Daily point capacity too large";
pub static DAILY_CAPACITY_ZERO_ERROR: &str = "Daily point capacity cannot be zero";
pub static NO_TRAILING_AVERAGE_ERROR: &str = "No trailing average computed yet";
