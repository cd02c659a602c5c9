multiversx_sc::imports!();

use arrayvec::ArrayVec;

use crate::{
    bounds,
    constants::CARRY_QUEUE_CAPACITY,
    structs::{CarryOver, Granularity, MedianBucket, TokenPair},
};

/// Hierarchical bucket rollup. Every coarser bucket is maintained as a
/// running sum/count pair, updated only when its finer source bucket closes,
/// so no raw observation history is ever stored or re-scanned.
#[multiversx_sc::module]
pub trait RollupModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// Folds one accepted observation into the day bucket and cascades any
    /// closed-bucket totals upward through the feed graph.
    ///
    /// The scheme flag is sampled once here and threaded through the whole
    /// cascade; re-reading it mid-cascade could reroute carries.
    fn update_rollup(&self, token_pair: &TokenPair<Self::Api>, value: &BigUint) {
        if !self.rollup_active().get() {
            return;
        }
        let scheme_active = self.is_current_week_scheme_active();

        // Buckets are provisioned at pair registration, never lazily.
        if self.median_buckets(token_pair, &Granularity::Day).is_empty() {
            return;
        }

        let now = self.blockchain().get_block_timestamp();
        let mut work_list: ArrayVec<CarryOver<Self::Api>, CARRY_QUEUE_CAPACITY> = ArrayVec::new();
        work_list.push(CarryOver {
            granularity: Granularity::Day,
            timestamp: bounds::bucket_start(Granularity::Day, now, scheme_active),
            value: value.clone(),
            request_count: 1,
        });

        let mut cursor = 0;
        while cursor < work_list.len() {
            let item = work_list[cursor].clone();
            cursor += 1;
            self.fold_carry_over(token_pair, &item, now, scheme_active, &mut work_list);
        }
    }

    /// One cascade step: fold `item` into the bucket of its granularity that
    /// contains `item.timestamp`, or rotate the oldest slot onto the new
    /// period and enqueue the closed period's totals for the coarser
    /// granularities.
    fn fold_carry_over(
        &self,
        token_pair: &TokenPair<Self::Api>,
        item: &CarryOver<Self::Api>,
        now: u64,
        scheme_active: bool,
        work_list: &mut ArrayVec<CarryOver<Self::Api>, CARRY_QUEUE_CAPACITY>,
    ) {
        let mut mapper = self.median_buckets(token_pair, &item.granularity);
        let slot_count = mapper.len();
        if slot_count == 0 {
            return;
        }

        // Once the current-week scheme is active, legacy-week slots are
        // frozen history: the carried totals replace the oldest slot and the
        // cascade stops here.
        if item.granularity == Granularity::LegacyWeek && scheme_active {
            let slot = self.oldest_slot(&mapper, slot_count);
            mapper.set(
                slot,
                &MedianBucket {
                    accumulated_value: item.value.clone(),
                    request_count: item.request_count,
                    bucket_start: item.timestamp,
                },
            );
            return;
        }

        if let Some(slot) = self.slot_containing(
            &mapper,
            slot_count,
            item.granularity,
            item.timestamp,
            false,
            scheme_active,
        ) {
            // Common path: the observation lands in an already-open bucket.
            let mut bucket = mapper.get(slot);
            bucket.accumulated_value += &item.value;
            bucket.request_count += item.request_count;
            mapper.set(slot, &bucket);
            return;
        }

        // The period rolled over. Capture the totals to carry upward: the
        // reused slot's contents, or the previous period's slot when one
        // still matches (that slot keeps its totals; only the reused slot is
        // overwritten).
        let reuse_slot = self.oldest_slot(&mapper, slot_count);
        let mut carried = mapper.get(reuse_slot);
        if let Some(previous_slot) = self.slot_containing(
            &mapper,
            slot_count,
            item.granularity,
            item.timestamp,
            true,
            scheme_active,
        ) {
            carried = mapper.get(previous_slot);
        }

        mapper.set(
            reuse_slot,
            &MedianBucket {
                accumulated_value: item.value.clone(),
                request_count: item.request_count,
                bucket_start: bounds::bucket_start(item.granularity, now, scheme_active),
            },
        );

        if carried.accumulated_value != BigUint::zero() && carried.request_count != 0 {
            self.bucket_rollover_event(
                &token_pair.from,
                &token_pair.to,
                &item.granularity,
                &carried,
            );
            for target in item.granularity.cascade_targets(scheme_active) {
                work_list.push(CarryOver {
                    granularity: *target,
                    timestamp: carried.bucket_start,
                    value: carried.accumulated_value.clone(),
                    request_count: carried.request_count,
                });
            }
        }
    }

    /// First slot, in (timestamp, slot index) order, whose window contains
    /// `candidate`.
    fn slot_containing(
        &self,
        mapper: &VecMapper<MedianBucket<Self::Api>>,
        slot_count: usize,
        granularity: Granularity,
        candidate: u64,
        use_previous: bool,
        scheme_active: bool,
    ) -> Option<usize> {
        let mut best: Option<(u64, usize)> = None;
        for index in 1..=slot_count {
            let bucket = mapper.get(index);
            if bounds::is_within_bucket(
                granularity,
                bucket.bucket_start,
                candidate,
                use_previous,
                scheme_active,
            ) {
                let key = (bucket.bucket_start, index);
                if best.map_or(true, |current| key < current) {
                    best = Some(key);
                }
            }
        }
        best.map(|(_, index)| index)
    }

    /// Slot reused on rollover: minimal (timestamp, slot index).
    fn oldest_slot(&self, mapper: &VecMapper<MedianBucket<Self::Api>>, slot_count: usize) -> usize {
        let mut oldest_index = 1;
        let mut oldest_timestamp = u64::MAX;
        for index in 1..=slot_count {
            let bucket = mapper.get(index);
            if bucket.bucket_start < oldest_timestamp {
                oldest_timestamp = bucket.bucket_start;
                oldest_index = index;
            }
        }
        oldest_index
    }

    /// The presence of a `CurrentWeek` slot on the reference pair signals
    /// that the deployment has been migrated to the current-week scheme.
    #[view(isCurrentWeekSchemeActive)]
    fn is_current_week_scheme_active(&self) -> bool {
        if self.reference_pair().is_empty() {
            return false;
        }
        let reference = self.reference_pair().get();
        !self
            .median_buckets(&reference, &Granularity::CurrentWeek)
            .is_empty()
    }

    /// Tops a granularity's slot pool up to its fixed capacity, each new
    /// slot seeded from `seed`. Idempotent; never shrinks. No-ops while the
    /// rollup engine is inactive, which is why the repair endpoint exists.
    fn ensure_bucket_slots(
        &self,
        token_pair: &TokenPair<Self::Api>,
        granularity: Granularity,
        seed: &MedianBucket<Self::Api>,
    ) {
        if !self.rollup_active().get() {
            return;
        }
        let mut mapper = self.median_buckets(token_pair, &granularity);
        for _ in mapper.len()..granularity.slot_capacity() {
            mapper.push(seed);
        }
    }

    fn provision_pair_buckets(&self, token_pair: &TokenPair<Self::Api>) {
        for granularity in Granularity::ALL {
            self.ensure_bucket_slots(token_pair, granularity, &MedianBucket::zeroed());
        }
    }
}
