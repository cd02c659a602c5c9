multiversx_sc::imports!();

use crate::{
    bounds,
    constants::{LEGACY_TIME_BIAS_SECONDS, NULL_TIMESTAMP},
    errors::{ROLLUP_NOT_ACTIVE_ERROR, SCHEME_ALREADY_MIGRATED_ERROR},
    structs::{Granularity, MedianBucket, TokenPair},
};

/// One-shot conversion from the legacy 4-slot weekly scheme to the
/// day/current-week/month scheme. Destructive; the `CurrentWeek` presence
/// check on the reference pair is the only guard against running it twice.
#[multiversx_sc::module]
pub trait MigrationModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::rollup::RollupModule
{
    #[only_owner]
    #[endpoint(migrateBucketScheme)]
    fn migrate_bucket_scheme(&self) {
        require!(self.rollup_active().get(), ROLLUP_NOT_ACTIVE_ERROR);
        require!(
            !self.is_current_week_scheme_active(),
            SCHEME_ALREADY_MIGRATED_ERROR
        );

        // The whole procedure computes under the legacy-scheme snapshot,
        // even while it creates the CurrentWeek slots that flip the flag.
        let now = self.blockchain().get_block_timestamp();
        let day_start = bounds::bucket_start(Granularity::Day, now, false);

        for token_pair in self.pairs().iter() {
            self.migrate_pair(&token_pair, day_start);
        }
    }

    fn migrate_pair(&self, token_pair: &TokenPair<Self::Api>, day_start: u64) {
        // Capture the legacy-week bucket whose window contains today, then
        // zero it in place; it stays behind as a frozen historical slot.
        let mut carried = MedianBucket::zeroed();
        let mut week_mapper = self.median_buckets(token_pair, &Granularity::LegacyWeek);
        let week_slot_count = week_mapper.len();
        if let Some(slot) = self.slot_containing(
            &week_mapper,
            week_slot_count,
            Granularity::LegacyWeek,
            day_start,
            false,
            false,
        ) {
            carried = week_mapper.get(slot);
            week_mapper.set(slot, &MedianBucket::zeroed());
        }

        // Fold the carried totals into whichever month bucket contains today.
        let mut month_mapper = self.median_buckets(token_pair, &Granularity::Month);
        let month_slot_count = month_mapper.len();
        if let Some(slot) = self.slot_containing(
            &month_mapper,
            month_slot_count,
            Granularity::Month,
            day_start,
            false,
            false,
        ) {
            let mut bucket = month_mapper.get(slot);
            bucket.accumulated_value += &carried.accumulated_value;
            bucket.request_count += carried.request_count;
            month_mapper.set(slot, &bucket);
        }

        // The new CurrentWeek slot transplants the legacy week's running
        // totals into the new granularity.
        self.ensure_bucket_slots(token_pair, Granularity::CurrentWeek, &carried);

        // Remove the compatibility offset from every stored boundary; the
        // active scheme rounds without it.
        for granularity in Granularity::ALL {
            let mut mapper = self.median_buckets(token_pair, &granularity);
            for index in 1..=mapper.len() {
                let mut bucket = mapper.get(index);
                if bucket.bucket_start != NULL_TIMESTAMP {
                    bucket.bucket_start -= LEGACY_TIME_BIAS_SECONDS;
                    mapper.set(index, &bucket);
                }
            }
        }

        self.scheme_migrated_event(&token_pair.from, &token_pair.to, &carried);
    }
}
