multiversx_sc::imports!();

use crate::{
    constants::{DEFAULT_DAILY_POINTS_CAPACITY, DEFAULT_DAILY_ROLLUP_COOLDOWN_SECONDS, MAX_DAILY_POINTS},
    errors::{
        DAILY_CAPACITY_TOO_LARGE_ERROR, DAILY_CAPACITY_ZERO_ERROR, PAIR_ALREADY_REGISTERED_ERROR,
        PAIR_NOT_REGISTERED_ERROR,
    },
    structs::{AverageWindow, Granularity, OracleStatus, TokenPair},
};

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::submission::SubmissionModule
    + crate::views::ViewsModule
    + crate::events::EventsModule
    + crate::rollup::RollupModule
    + crate::daily::DailyRollupModule
{
    #[init]
    fn init(
        &self,
        submission_count: usize,
        reference_from: ManagedBuffer,
        reference_to: ManagedBuffer,
        oracles: MultiValueEncoded<ManagedAddress>,
    ) {
        self.add_oracles(oracles);

        self.require_valid_submission_count(submission_count);
        self.submission_count().set(submission_count);

        self.reference_pair().set(TokenPair {
            from: reference_from,
            to: reference_to,
        });

        self.daily_points_capacity()
            .set(DEFAULT_DAILY_POINTS_CAPACITY);
        self.daily_rollup_cooldown()
            .set(DEFAULT_DAILY_ROLLUP_COOLDOWN_SECONDS);

        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    #[only_owner]
    #[endpoint(addOracles)]
    fn add_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut oracle_mapper = self.oracle_status();
        for oracle in oracles {
            if !oracle_mapper.contains_key(&oracle) {
                let _ = oracle_mapper.insert(
                    oracle.clone(),
                    OracleStatus {
                        total_submissions: 0,
                        accepted_submissions: 0,
                    },
                );
            }
        }
    }

    /// Also receives submission count,
    /// so the owner does not have to update it manually with setSubmissionCount before this call
    #[only_owner]
    #[endpoint(removeOracles)]
    fn remove_oracles(&self, submission_count: usize, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut oracle_mapper = self.oracle_status();
        for oracle in oracles {
            let _ = oracle_mapper.remove(&oracle);
        }

        self.set_submission_count(submission_count);
    }

    #[only_owner]
    #[endpoint(setSubmissionCount)]
    fn set_submission_count(&self, submission_count: usize) {
        self.require_valid_submission_count(submission_count);
        self.submission_count().set(submission_count);
    }

    /// Registers a pair and provisions its bucket slots. Provisioning is a
    /// no-op while the rollup engine is off; `provisionBucketSlots` repairs
    /// such pairs after activation.
    #[only_owner]
    #[endpoint(registerPair)]
    fn register_pair(&self, from: ManagedBuffer, to: ManagedBuffer, decimals: u8) {
        let token_pair = TokenPair { from, to };
        require!(
            !self.pairs().contains(&token_pair),
            PAIR_ALREADY_REGISTERED_ERROR
        );

        self.pairs().insert(token_pair.clone());
        self.pair_decimals(&token_pair.from, &token_pair.to)
            .set(Some(decimals));
        self.provision_pair_buckets(&token_pair);

        self.pair_registered_event(&token_pair.from, &token_pair.to);
    }

    #[only_owner]
    #[endpoint(removePair)]
    fn remove_pair(&self, from: ManagedBuffer, to: ManagedBuffer) {
        let token_pair = TokenPair { from, to };
        require!(
            self.pairs().contains(&token_pair),
            PAIR_NOT_REGISTERED_ERROR
        );

        for granularity in Granularity::ALL {
            self.median_buckets(&token_pair, &granularity).clear();
        }
        for window in AverageWindow::ALL {
            self.trailing_average(&token_pair, &window).clear();
        }
        self.daily_points(&token_pair).clear();
        self.clear_submissions(&token_pair);
        self.submissions().remove(&token_pair);
        self.latest_round(&token_pair.from, &token_pair.to).clear();
        self.pair_decimals(&token_pair.from, &token_pair.to).clear();
        self.pairs().swap_remove(&token_pair);

        self.pair_removed_event(&token_pair.from, &token_pair.to);
    }

    #[only_owner]
    #[endpoint(setRollupActive)]
    fn set_rollup_active(&self, is_active: bool) {
        self.rollup_active().set(is_active);
        self.rollup_activation_event(is_active);
    }

    /// Tops every registered pair's slot pools up to capacity. Repairs pairs
    /// that were registered while the rollup engine was inactive.
    #[only_owner]
    #[endpoint(provisionBucketSlots)]
    fn provision_bucket_slots(&self) {
        for token_pair in self.pairs().iter() {
            self.provision_pair_buckets(&token_pair);
        }
    }

    #[only_owner]
    #[endpoint(setDailyRollupConfig)]
    fn set_daily_rollup_config(&self, points_capacity: usize, cooldown_seconds: u64) {
        // A zero-capacity ring would make the overwrite-oldest branch index
        // into an empty pool.
        require!(points_capacity >= 1, DAILY_CAPACITY_ZERO_ERROR);
        require!(
            points_capacity <= MAX_DAILY_POINTS,
            DAILY_CAPACITY_TOO_LARGE_ERROR
        );
        self.daily_points_capacity().set(points_capacity);
        self.daily_rollup_cooldown().set(cooldown_seconds);
    }
}
