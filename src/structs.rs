use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

use crate::constants::{
    NULL_TIMESTAMP, SECONDS_PER_DAY, SECONDS_PER_FIXED_MONTH, SECONDS_PER_WEEK,
};

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct TokenPair<M: ManagedTypeApi> {
    pub from: ManagedBuffer<M>,
    pub to: ManagedBuffer<M>,
}

/// Time granularity of a median bucket. `LegacyWeek` is the pre-migration
/// weekly ring; once the current-week scheme is active it only receives
/// frozen carry-overs from `CurrentWeek`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Granularity {
    Day,
    CurrentWeek,
    LegacyWeek,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Day,
        Granularity::CurrentWeek,
        Granularity::LegacyWeek,
        Granularity::Month,
    ];

    /// Fixed number of bucket slots kept per pair.
    pub fn slot_capacity(&self) -> usize {
        match self {
            Granularity::Day => 1,
            Granularity::CurrentWeek => 1,
            Granularity::LegacyWeek => 4,
            Granularity::Month => 12,
        }
    }

    /// Window length for the fixed-duration rounding and membership paths.
    /// `Month` only uses this while the current-week scheme is not active.
    pub fn fixed_duration_seconds(&self) -> u64 {
        match self {
            Granularity::Day => SECONDS_PER_DAY,
            Granularity::CurrentWeek => SECONDS_PER_WEEK,
            Granularity::LegacyWeek => SECONDS_PER_WEEK,
            Granularity::Month => SECONDS_PER_FIXED_MONTH,
        }
    }

    /// Coarser granularities fed by this one when a bucket closes.
    pub fn cascade_targets(&self, current_week_scheme_active: bool) -> &'static [Granularity] {
        match (self, current_week_scheme_active) {
            (Granularity::Day, true) => &[Granularity::CurrentWeek, Granularity::Month],
            (Granularity::Day, false) => &[Granularity::LegacyWeek],
            (Granularity::CurrentWeek, _) => &[Granularity::LegacyWeek],
            (Granularity::LegacyWeek, false) => &[Granularity::Month],
            _ => &[],
        }
    }
}

/// One fixed slot of the rollup engine: a running sum/count of quote values
/// for a single period of one granularity. The mean of the period is
/// `accumulated_value / request_count`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct MedianBucket<M: ManagedTypeApi> {
    pub accumulated_value: BigUint<M>,
    pub request_count: u64,
    pub bucket_start: u64,
}

impl<M: ManagedTypeApi> MedianBucket<M> {
    pub fn zeroed() -> Self {
        MedianBucket {
            accumulated_value: BigUint::zero(),
            request_count: 0,
            bucket_start: NULL_TIMESTAMP,
        }
    }
}

/// One entry of the bounded per-pair ring of daily means.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct DailyPoint<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub timestamp: u64,
}

/// Trailing-average windows, in days of daily points.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AverageWindow {
    SevenDays,
    FourteenDays,
    ThirtyDays,
    FortyFiveDays,
}

impl AverageWindow {
    pub const ALL: [AverageWindow; 4] = [
        AverageWindow::SevenDays,
        AverageWindow::FourteenDays,
        AverageWindow::ThirtyDays,
        AverageWindow::FortyFiveDays,
    ];

    pub fn days(&self) -> usize {
        match self {
            AverageWindow::SevenDays => 7,
            AverageWindow::FourteenDays => 14,
            AverageWindow::ThirtyDays => 30,
            AverageWindow::FortyFiveDays => 45,
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct TrailingAverage<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub timestamp: u64,
}

/// One item of the cascade work list: totals of a just-closed bucket, to be
/// folded into `granularity`.
#[derive(Clone)]
pub struct CarryOver<M: ManagedTypeApi> {
    pub granularity: Granularity,
    pub timestamp: u64,
    pub value: BigUint<M>,
    pub request_count: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub asset_decimals: u8,
    pub round: u32,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub round_id: u32,
    pub from: ManagedBuffer<M>,
    pub to: ManagedBuffer<M>,
    pub timestamp: u64,
    pub price: BigUint<M>,
    pub asset_decimals: u8,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Debug, PartialEq, Eq)]
pub struct OracleStatus {
    pub accepted_submissions: u64,
    pub total_submissions: u64,
}

#[type_abi]
#[derive(TopEncode)]
pub struct NewRoundEvent<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub asset_decimals: u8,
    pub block: u64,
    pub epoch: u64,
}

#[type_abi]
#[derive(TopEncode)]
pub struct DiscardSubmissionEvent {
    pub submission_timestamp: u64,
    pub first_submission_timestamp: u64,
    pub has_caller_already_submitted: bool,
}
