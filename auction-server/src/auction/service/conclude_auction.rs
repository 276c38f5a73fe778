use {
    super::Service,
    crate::auction::entities,
};

pub struct ConcludeAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Marks the auction completed in memory, persists the new status and stops tracking it.
    ///
    /// Returns true only when the durable update succeeded.
    #[tracing::instrument(skip_all, name = "conclude_auction", fields(auction_id = %input.auction_id))]
    pub async fn conclude_auction(&self, input: ConcludeAuctionInput) -> bool {
        let auction_id = input.auction_id;
        if !self.repo.mark_in_memory_auction_completed(auction_id).await {
            tracing::debug!("Auction is no longer active in memory, skipping");
            return false;
        }

        match self
            .repo
            .update_auction_status(auction_id, entities::AuctionStatus::Completed)
            .await
        {
            Ok(()) => {
                self.repo.remove_in_memory_auction(auction_id).await;
                tracing::info!("Auction closed");
                true
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to update auction status");
                if self.config.retry_failed_status_updates {
                    self.repo.reactivate_in_memory_auction(auction_id).await;
                } else {
                    // The durable record stays active while this process stops tracking it.
                    self.repo.remove_in_memory_auction(auction_id).await;
                }
                false
            }
        }
    }
}
