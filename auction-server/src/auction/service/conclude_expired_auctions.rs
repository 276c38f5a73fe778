use {
    super::{
        conclude_auction::ConcludeAuctionInput,
        Service,
    },
    time::OffsetDateTime,
};

impl Service {
    /// Runs one expiry pass against the auctions whose deadline is before `now`.
    ///
    /// Auctions registered after the snapshot is taken are left for the next pass.
    /// Returns the number of auctions whose completion was persisted.
    pub async fn conclude_expired_auctions(&self, now: OffsetDateTime) -> usize {
        let expired_auctions = self.repo.get_expired_in_memory_auctions(now).await;
        if expired_auctions.is_empty() {
            return 0;
        }

        tracing::debug!(count = expired_auctions.len(), "Concluding expired auctions");
        let mut concluded = 0;
        for auction_id in expired_auctions {
            if self.conclude_auction(ConcludeAuctionInput { auction_id }).await {
                concluded += 1;
            }
        }
        concluded
    }
}
