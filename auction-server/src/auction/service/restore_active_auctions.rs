use {
    super::Service,
    crate::auction::entities,
};

impl Service {
    /// Tracks the auctions left active in the store by a previous run of the process.
    pub async fn restore_active_auctions(&self) -> anyhow::Result<usize> {
        let auctions = self.repo.get_active_auctions().await?;
        let mut restored = 0;
        for auction in auctions {
            let Some(deadline) = auction.get_deadline(self.config.auction_duration) else {
                tracing::error!(
                    auction_id = %auction.id,
                    auction_duration = ?self.config.auction_duration,
                    "Auction deadline is out of range, skipping"
                );
                continue;
            };
            if self
                .repo
                .add_in_memory_auction(
                    auction.id,
                    entities::TrackedAuction::new(auction.status, deadline),
                )
                .await
            {
                restored += 1;
            }
        }
        tracing::info!(restored, "Restored active auctions from the database");
        Ok(restored)
    }
}
