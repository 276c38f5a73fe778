use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        status: entities::AuctionStatus,
    ) -> anyhow::Result<()> {
        self.db.update_auction_status(auction_id, status).await
    }
}
