use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    /// Returns false if the auction is already tracked, in which case the existing entry is kept.
    pub async fn add_in_memory_auction(
        &self,
        auction_id: entities::AuctionId,
        auction: entities::TrackedAuction,
    ) -> bool {
        let mut write_guard = self.in_memory_store.auctions.write().await;
        if write_guard.contains_key(&auction_id) {
            tracing::warn!(auction_id = %auction_id, "Auction is already tracked in memory");
            return false;
        }
        write_guard.insert(auction_id, auction);
        true
    }

    // NOTE: Do not call this function directly. Instead call `add_auction` from `Service`.
    pub async fn add_auction(
        &self,
        auction: entities::Auction,
        deadline: OffsetDateTime,
    ) -> anyhow::Result<entities::Auction> {
        self.db.add_auction(&auction).await?;
        self.add_in_memory_auction(
            auction.id,
            entities::TrackedAuction::new(auction.status, deadline),
        )
        .await;
        Ok(auction)
    }
}
