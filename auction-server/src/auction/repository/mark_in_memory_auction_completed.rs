use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Moves a tracked auction from active to completed.
    ///
    /// Returns false when the auction is not tracked or was already completed, so that
    /// every auction is concluded at most once.
    pub async fn mark_in_memory_auction_completed(&self, auction_id: entities::AuctionId) -> bool {
        let mut write_guard = self.in_memory_store.auctions.write().await;
        match write_guard.get_mut(&auction_id) {
            Some(auction) if auction.status == entities::AuctionStatus::Active => {
                auction.status = entities::AuctionStatus::Completed;
                true
            }
            _ => false,
        }
    }
}
