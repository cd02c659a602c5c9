#![allow(dead_code)]

use crate::constants::*;
use multiversx_sc_scenario::imports::*;

use multiversx_sc_modules::pause::PauseModule;
use oracle_ledger::{
    admin::AdminModule,
    daily::DailyRollupModule,
    migration::MigrationModule,
    rollup::RollupModule,
    storage::StorageModule,
    structs::{AverageWindow, Granularity, MedianBucket, TokenPair},
    OracleLedger,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(ORACLE_LEDGER_PATH, oracle_ledger::ContractBuilder);
    blockchain
}

pub struct OracleLedgerTestState {
    pub world: ScenarioWorld,
}

impl OracleLedgerTestState {
    /// Deploys with four whitelisted oracles, submission count 1 and
    /// EGLD/USD as the reference pair. The contract starts paused and with
    /// the rollup engine off.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(ORACLE_ADDRESS_1).nonce(1);
        world.account(ORACLE_ADDRESS_2).nonce(1);
        world.account(ORACLE_ADDRESS_3).nonce(1);
        world.account(ORACLE_ADDRESS_4).nonce(1);
        world.account(STRANGER_ADDRESS).nonce(1);

        world.current_block().block_timestamp(GENESIS_TIMESTAMP);

        world
            .tx()
            .from(OWNER_ADDRESS)
            .raw_deploy()
            .code(ORACLE_LEDGER_PATH)
            .new_address(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, |sc| {
                let mut oracles = MultiValueEncoded::new();
                oracles.push(ORACLE_ADDRESS_1.to_managed_address());
                oracles.push(ORACLE_ADDRESS_2.to_managed_address());
                oracles.push(ORACLE_ADDRESS_3.to_managed_address());
                oracles.push(ORACLE_ADDRESS_4.to_managed_address());

                sc.init(
                    1usize,
                    ManagedBuffer::from(EGLD_TICKER),
                    ManagedBuffer::from(DOLLAR_TICKER),
                    oracles,
                );
            });

        Self { world }
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, |sc| sc.unpause_endpoint());
    }

    pub fn activate_rollup(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, |sc| {
                sc.set_rollup_active(true)
            });
    }

    pub fn register_pair(&mut self, from: &'static [u8], to: &'static [u8], decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                sc.register_pair(
                    ManagedBuffer::from(from),
                    ManagedBuffer::from(to),
                    decimals,
                )
            });
    }

    /// Recreates a pre-migration deployment: slot pools for every
    /// granularity except `CurrentWeek`, so the current-week scheme reads as
    /// inactive.
    pub fn provision_legacy_buckets(&mut self, from: &'static [u8], to: &'static [u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                for granularity in [
                    Granularity::Day,
                    Granularity::LegacyWeek,
                    Granularity::Month,
                ] {
                    sc.ensure_bucket_slots(&token_pair, granularity, &MedianBucket::zeroed());
                }
            });
    }

    pub fn provision_all_pairs(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, |sc| sc.provision_bucket_slots());
    }

    pub fn set_submission_count(&mut self, submission_count: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                sc.set_submission_count(submission_count)
            });
    }

    pub fn set_daily_rollup_config(&mut self, points_capacity: usize, cooldown_seconds: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                sc.set_daily_rollup_config(points_capacity, cooldown_seconds)
            });
    }

    /// Submits one quote at the given block timestamp. With submission
    /// count 1 every accepted quote also finalizes a round.
    pub fn submit(
        &mut self,
        oracle: TestAddress,
        from: &'static [u8],
        to: &'static [u8],
        timestamp: u64,
        price: u64,
    ) {
        self.set_block_timestamp(timestamp);
        self.world
            .tx()
            .from(oracle)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                sc.submit(
                    ManagedBuffer::from(from),
                    ManagedBuffer::from(to),
                    timestamp,
                    BigUint::from(price),
                )
            });
    }

    pub fn run_daily_rollup(&mut self, from: &'static [u8], to: &'static [u8], timestamp: u64) {
        self.set_block_timestamp(timestamp);
        self.world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                sc.run_daily_rollup(ManagedBuffer::from(from), ManagedBuffer::from(to))
            });
    }

    pub fn migrate_bucket_scheme(&mut self, timestamp: u64) {
        self.set_block_timestamp(timestamp);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, |sc| sc.migrate_bucket_scheme());
    }

    pub fn check_slot_count(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        granularity: Granularity,
        expected: usize,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                assert_eq!(
                    sc.median_buckets(&token_pair, &granularity).len(),
                    expected,
                    "slot count mismatch for {granularity:?}"
                );
            });
    }

    pub fn check_bucket(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        granularity: Granularity,
        slot: usize,
        expected_value: u64,
        expected_count: u64,
        expected_start: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                let bucket = sc.median_buckets(&token_pair, &granularity).get(slot);
                assert_eq!(
                    bucket.accumulated_value,
                    BigUint::from(expected_value),
                    "value mismatch for {granularity:?} slot {slot}"
                );
                assert_eq!(
                    bucket.request_count, expected_count,
                    "count mismatch for {granularity:?} slot {slot}"
                );
                assert_eq!(
                    bucket.bucket_start, expected_start,
                    "start mismatch for {granularity:?} slot {slot}"
                );
            });
    }

    pub fn check_daily_point_count(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        expected: usize,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                assert_eq!(sc.daily_points(&token_pair).len(), expected);
            });
    }

    pub fn check_daily_point(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        slot: usize,
        expected_value: u64,
        expected_timestamp: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                let point = sc.daily_points(&token_pair).get(slot);
                assert_eq!(
                    point.value,
                    BigUint::from(expected_value),
                    "daily point value mismatch at slot {slot}"
                );
                assert_eq!(
                    point.timestamp, expected_timestamp,
                    "daily point timestamp mismatch at slot {slot}"
                );
            });
    }

    pub fn check_trailing_average(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        window: AverageWindow,
        expected_value: u64,
        expected_timestamp: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let token_pair = TokenPair {
                    from: ManagedBuffer::from(from),
                    to: ManagedBuffer::from(to),
                };
                let average = sc.trailing_average(&token_pair, &window).get();
                assert_eq!(
                    average.value,
                    BigUint::from(expected_value),
                    "average value mismatch for {window:?}"
                );
                assert_eq!(
                    average.timestamp, expected_timestamp,
                    "average timestamp mismatch for {window:?}"
                );
            });
    }

    pub fn check_latest_round(
        &mut self,
        from: &'static [u8],
        to: &'static [u8],
        expected_round: u32,
        expected_price: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let feed = sc
                    .latest_round(&ManagedBuffer::from(from), &ManagedBuffer::from(to))
                    .get();
                assert_eq!(feed.round, expected_round);
                assert_eq!(feed.price, BigUint::from(expected_price));
            });
    }

    pub fn check_oracle_status(
        &mut self,
        oracle: TestAddress,
        expected_accepted: u64,
        expected_total: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                let status = sc
                    .oracle_status()
                    .get(&oracle.to_managed_address())
                    .unwrap();
                assert_eq!(status.accepted_submissions, expected_accepted);
                assert_eq!(status.total_submissions, expected_total);
            });
    }

    pub fn check_scheme_active(&mut self, expected: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_LEDGER_ADDRESS)
            .whitebox(oracle_ledger::contract_obj, move |sc| {
                assert_eq!(sc.is_current_week_scheme_active(), expected);
            });
    }
}
