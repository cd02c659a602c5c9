multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{
    AverageWindow, DailyPoint, Granularity, MedianBucket, OracleStatus, TimestampedPrice,
    TokenPair, TrailingAverage,
};

#[multiversx_sc::module]
pub trait StorageModule {
    #[storage_mapper("pair_decimals")]
    fn pair_decimals(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<Option<u8>>;

    #[view]
    #[storage_mapper("submission_count")]
    fn submission_count(&self) -> SingleValueMapper<usize>;

    #[storage_mapper("oracle_status")]
    fn oracle_status(&self) -> MapMapper<ManagedAddress, OracleStatus>;

    #[storage_mapper("pairs")]
    fn pairs(&self) -> UnorderedSetMapper<TokenPair<Self::Api>>;

    /// Pair whose `CurrentWeek` slot signals that the bucket scheme has been
    /// migrated; fixed at deploy time.
    #[storage_mapper("reference_pair")]
    fn reference_pair(&self) -> SingleValueMapper<TokenPair<Self::Api>>;

    /// Gate for the whole rollup engine; while off, submissions still
    /// produce rounds but no bucket is touched or provisioned.
    #[view(isRollupActive)]
    #[storage_mapper("rollup_active")]
    fn rollup_active(&self) -> SingleValueMapper<bool>;

    /// Fixed-capacity slot pool per pair and granularity. Slots are created
    /// once by provisioning and afterwards only modified in place.
    #[storage_mapper("median_buckets")]
    fn median_buckets(
        &self,
        token_pair: &TokenPair<Self::Api>,
        granularity: &Granularity,
    ) -> VecMapper<MedianBucket<Self::Api>>;

    /// Bounded ring of daily means, one entry per calendar day.
    #[storage_mapper("daily_points")]
    fn daily_points(&self, token_pair: &TokenPair<Self::Api>) -> VecMapper<DailyPoint<Self::Api>>;

    #[storage_mapper("trailing_average")]
    fn trailing_average(
        &self,
        token_pair: &TokenPair<Self::Api>,
        window: &AverageWindow,
    ) -> SingleValueMapper<TrailingAverage<Self::Api>>;

    #[storage_mapper("daily_points_capacity")]
    fn daily_points_capacity(&self) -> SingleValueMapper<usize>;

    #[storage_mapper("daily_rollup_cooldown")]
    fn daily_rollup_cooldown(&self) -> SingleValueMapper<u64>;

    /// Process-wide rate limiter shared by all pairs.
    #[storage_mapper("last_daily_rollup_run")]
    fn last_daily_rollup_run(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("latest_round")]
    fn latest_round(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;

    #[storage_mapper("submissions")]
    fn submissions(
        &self,
    ) -> MapStorageMapper<TokenPair<Self::Api>, MapMapper<ManagedAddress, BigUint>>;

    #[storage_mapper("first_submission_timestamp")]
    fn first_submission_timestamp(
        &self,
        token_pair: &TokenPair<Self::Api>,
    ) -> SingleValueMapper<u64>;

    #[storage_mapper("last_submission_timestamp")]
    fn last_submission_timestamp(
        &self,
        token_pair: &TokenPair<Self::Api>,
    ) -> SingleValueMapper<u64>;
}
