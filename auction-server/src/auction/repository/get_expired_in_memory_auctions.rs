use {
    super::Repository,
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    /// Snapshot of the active auctions whose deadline is strictly before `now`.
    pub async fn get_expired_in_memory_auctions(
        &self,
        now: OffsetDateTime,
    ) -> Vec<entities::AuctionId> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .iter()
            .filter(|(_, auction)| {
                auction.status == entities::AuctionStatus::Active && auction.is_expired(now)
            })
            .map(|(auction_id, _)| *auction_id)
            .collect()
    }
}
