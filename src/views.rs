multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{
    errors::*,
    structs::{
        AverageWindow, DailyPoint, Granularity, MedianBucket, PriceFeed, TimestampedPrice,
        TokenPair, TrailingAverage,
    },
};

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Converts timestamped price data to user-friendly price feed format.
    /// Combines token pair info with latest round data.
    fn make_price_feed(
        &self,
        token_pair: TokenPair<Self::Api>,
        last_price: TimestampedPrice<Self::Api>,
    ) -> PriceFeed<Self::Api> {
        PriceFeed {
            round_id: last_price.round,
            from: token_pair.from,
            to: token_pair.to,
            timestamp: last_price.timestamp,
            price: last_price.price,
            asset_decimals: last_price.asset_decimals,
        }
    }

    fn get_pair_decimals(&self, from: &ManagedBuffer, to: &ManagedBuffer) -> u8 {
        self.pair_decimals(from, to)
            .get()
            .unwrap_or_else(|| sc_panic!(PAIR_DECIMALS_NOT_CONFIGURED_ERROR))
    }

    /// Returns latest aggregated prices for multiple token pairs.
    /// Skips pairs without available price data.
    /// Enables batch price queries for efficiency.
    #[view(latestRoundData)]
    fn latest_round_data(
        &self,
        pairs: MultiValueEncoded<TokenPair<Self::Api>>,
    ) -> MultiValueEncoded<PriceFeed<Self::Api>> {
        self.require_not_paused();

        let mut result = MultiValueEncoded::new();
        for token_pair in pairs {
            let round_values = self.latest_round(&token_pair.from, &token_pair.to);
            if !round_values.is_empty() {
                result.push(self.make_price_feed(token_pair, round_values.get()));
            }
        }

        result
    }

    /// Returns latest aggregated price for a single token pair.
    /// Fails if no price data exists for the requested pair.
    /// Primary interface for price consumers.
    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, from: ManagedBuffer, to: ManagedBuffer) -> PriceFeed<Self::Api> {
        require!(self.not_paused(), PAUSED_ERROR);

        let round_values = self.latest_round(&from, &to);
        require!(!round_values.is_empty(), TOKEN_PAIR_NOT_FOUND_ERROR);

        let token_pair = TokenPair { from, to };

        self.make_price_feed(token_pair, round_values.get())
    }

    /// Returns all registered oracle addresses.
    /// Used for transparency and monitoring oracle participation.
    #[view(getOracles)]
    fn get_oracles(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for key in self.oracle_status().keys() {
            result.push(key);
        }
        result
    }

    #[view(getPairs)]
    fn get_pairs(&self) -> MultiValueEncoded<TokenPair<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for token_pair in self.pairs().iter() {
            result.push(token_pair);
        }
        result
    }

    /// Raw slot contents for one pair and granularity, in slot order.
    #[view(medianBuckets)]
    fn median_buckets_view(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
        granularity: Granularity,
    ) -> MultiValueEncoded<MedianBucket<Self::Api>> {
        let token_pair = TokenPair { from, to };
        let mut result = MultiValueEncoded::new();
        for bucket in self.median_buckets(&token_pair, &granularity).iter() {
            result.push(bucket);
        }
        result
    }

    #[view(dailyPoints)]
    fn daily_points_view(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> MultiValueEncoded<DailyPoint<Self::Api>> {
        let token_pair = TokenPair { from, to };
        let mut result = MultiValueEncoded::new();
        for point in self.daily_points(&token_pair).iter() {
            result.push(point);
        }
        result
    }

    #[view(trailingAverage)]
    fn trailing_average_view(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
        window: AverageWindow,
    ) -> TrailingAverage<Self::Api> {
        let token_pair = TokenPair { from, to };
        let mapper = self.trailing_average(&token_pair, &window);
        require!(!mapper.is_empty(), NO_TRAILING_AVERAGE_ERROR);
        mapper.get()
    }

    /// All four trailing averages for a pair; empty windows are skipped.
    #[view(trailingAverages)]
    fn trailing_averages_view(
        &self,
        from: ManagedBuffer,
        to: ManagedBuffer,
    ) -> MultiValueEncoded<MultiValue2<AverageWindow, TrailingAverage<Self::Api>>> {
        let token_pair = TokenPair { from, to };
        let mut result = MultiValueEncoded::new();
        for window in AverageWindow::ALL {
            let mapper = self.trailing_average(&token_pair, &window);
            if !mapper.is_empty() {
                result.push((window, mapper.get()).into());
            }
        }
        result
    }
}
