multiversx_sc::imports!();

use arrayvec::ArrayVec;
use core::cmp::min;

use crate::{
    constants::MAX_DAILY_POINTS,
    errors::PAIR_NOT_REGISTERED_ERROR,
    structs::{AverageWindow, DailyPoint, Granularity, TokenPair, TrailingAverage},
};

/// Daily rollup: derives one daily point per pair from the day bucket's
/// mean, keeps a bounded ring of recent points and recomputes the trailing
/// averages from it.
#[multiversx_sc::module]
pub trait DailyRollupModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Public poke for the rate-limited daily rollup; the cooldown gate
    /// makes it a no-op when invoked too early, so anyone may call it.
    #[endpoint(runDailyRollup)]
    fn run_daily_rollup(&self, from: ManagedBuffer, to: ManagedBuffer) {
        self.require_not_paused();

        let token_pair = TokenPair { from, to };
        require!(
            self.pairs().contains(&token_pair),
            PAIR_NOT_REGISTERED_ERROR
        );

        self.run_daily_rollup_if_due(&token_pair);
    }

    /// Runs the daily rollup when the process-wide cooldown has elapsed.
    /// The timer is advanced before doing any work, so a second trigger
    /// within the same window cannot re-enter.
    fn run_daily_rollup_if_due(&self, token_pair: &TokenPair<Self::Api>) {
        if !self.rollup_active().get() {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        let next_run = self.last_daily_rollup_run().get() + self.daily_rollup_cooldown().get();
        if now <= next_run {
            return;
        }
        self.last_daily_rollup_run().set(now);

        self.update_daily_points(token_pair);
        self.update_trailing_averages(token_pair);
    }

    /// The day bucket's (start, mean) pair; nothing while the pair has no
    /// day bucket or the bucket has not accumulated any submission yet.
    fn daily_bucket_point(&self, token_pair: &TokenPair<Self::Api>) -> Option<(u64, BigUint)> {
        let mapper = self.median_buckets(token_pair, &Granularity::Day);
        let slot_count = mapper.len();
        if slot_count == 0 {
            return None;
        }

        let mut latest = mapper.get(1);
        for index in 2..=slot_count {
            let bucket = mapper.get(index);
            if bucket.bucket_start > latest.bucket_start {
                latest = bucket;
            }
        }

        if latest.request_count == 0 {
            return None;
        }
        let mean = latest.accumulated_value / latest.request_count;
        Some((latest.bucket_start, mean))
    }

    /// Ring update: same-day points are corrected in place; once the ring is
    /// at capacity the oldest entry is overwritten, otherwise the point is
    /// appended.
    fn update_daily_points(&self, token_pair: &TokenPair<Self::Api>) {
        let Some((timestamp, value)) = self.daily_bucket_point(token_pair) else {
            return;
        };

        let mut mapper = self.daily_points(token_pair);
        let count = mapper.len();

        let mut latest_slot = 0;
        let mut latest_timestamp = 0;
        let mut oldest_slot = 1;
        let mut oldest_timestamp = u64::MAX;
        for index in 1..=count {
            let point = mapper.get(index);
            if point.timestamp >= latest_timestamp {
                latest_timestamp = point.timestamp;
                latest_slot = index;
            }
            if point.timestamp < oldest_timestamp {
                oldest_timestamp = point.timestamp;
                oldest_slot = index;
            }
        }

        let point = DailyPoint { value, timestamp };
        if latest_slot != 0 && latest_timestamp == timestamp {
            mapper.set(latest_slot, &point);
        } else if count >= self.daily_points_capacity().get() {
            mapper.set(oldest_slot, &point);
        } else {
            mapper.push(&point);
        }

        self.daily_rollup_event(&token_pair.from, &token_pair.to, &point);
    }

    /// Average of the most recent `min(window, available)` daily points;
    /// zero while no point exists.
    fn compute_trailing_average(&self, token_pair: &TokenPair<Self::Api>, days: usize) -> BigUint {
        let mapper = self.daily_points(token_pair);
        let count = mapper.len();

        let mut points: ArrayVec<(u64, BigUint), MAX_DAILY_POINTS> = ArrayVec::new();
        for index in 1..=count {
            let point = mapper.get(index);
            points.push((point.timestamp, point.value));
        }
        points.sort_unstable_by(|left, right| right.0.cmp(&left.0));

        let days = min(days, points.len());
        if days == 0 {
            return BigUint::zero();
        }

        let mut sum = BigUint::zero();
        for (_, value) in points.iter().take(days) {
            sum += value;
        }
        sum / (days as u64)
    }

    fn update_trailing_averages(&self, token_pair: &TokenPair<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        for window in AverageWindow::ALL {
            let value = self.compute_trailing_average(token_pair, window.days());
            self.trailing_average(token_pair, &window).set(TrailingAverage {
                value,
                timestamp: now,
            });
        }
    }
}
