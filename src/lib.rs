#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod bounds;
pub mod calendar;
pub mod constants;
pub mod daily;
pub mod errors;
pub mod events;
pub mod median;
pub mod migration;
pub mod rollup;
pub mod storage;
pub mod structs;
pub mod submission;
pub mod views;

/// Price oracle with an on-chain rolling ledger: accepted quotes are folded
/// into per-pair sum/count buckets at day, week and month granularities, and
/// a rate-limited daily rollup derives daily points and trailing averages
/// from them.
#[multiversx_sc::contract]
pub trait OracleLedger:
    crate::admin::AdminModule
    + crate::submission::SubmissionModule
    + crate::rollup::RollupModule
    + crate::daily::DailyRollupModule
    + crate::migration::MigrationModule
    + crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::views::ViewsModule
    + multiversx_sc_modules::pause::PauseModule
{
    #[endpoint(submit)]
    fn submit(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
        submission_timestamp: u64,
        price: BigUint,
    ) {
        self.require_not_paused();
        self.require_is_oracle();
        self.require_valid_submission_timestamp(submission_timestamp);

        self.submit_unchecked(from, to, price);
    }

    #[endpoint(submitBatch)]
    fn submit_batch(
        &self,
        submissions: MultiValueEncoded<MultiValue4<ManagedBuffer, ManagedBuffer, u64, BigUint>>,
    ) {
        self.require_not_paused();
        self.require_is_oracle();

        for (from, to, submission_timestamp, price) in submissions
            .into_iter()
            .map(|submission| submission.into_tuple())
        {
            self.require_valid_submission_timestamp(submission_timestamp);
            self.submit_unchecked(from, to, price);
        }
    }
}
