use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_active_auctions(&self) -> anyhow::Result<Vec<entities::Auction>> {
        self.db.get_active_auctions().await
    }
}
