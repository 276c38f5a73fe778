use {
    super::Repository,
    crate::auction::entities,
    std::collections::HashMap,
};

impl Repository {
    pub async fn get_in_memory_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Option<entities::TrackedAuction> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .get(&auction_id)
            .copied()
    }

    pub async fn get_in_memory_auctions(
        &self,
    ) -> HashMap<entities::AuctionId, entities::TrackedAuction> {
        self.in_memory_store.auctions.read().await.clone()
    }
}
