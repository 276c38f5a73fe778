use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn reactivate_in_memory_auction(&self, auction_id: entities::AuctionId) {
        if let Some(auction) = self
            .in_memory_store
            .auctions
            .write()
            .await
            .get_mut(&auction_id)
        {
            auction.status = entities::AuctionStatus::Active;
        }
    }
}
