use {
    super::{
        error::ServiceError,
        Service,
    },
    crate::auction::entities,
};

pub struct AddAuctionInput {
    pub auction: entities::AuctionCreate,
}

impl Service {
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, ServiceError> {
        let auction = entities::Auction::new_with_current_time(input.auction);
        tracing::Span::current().record("auction_id", auction.id.to_string());

        let deadline = auction
            .get_deadline(self.config.auction_duration)
            .ok_or_else(|| {
                tracing::error!(
                    auction_duration = ?self.config.auction_duration,
                    "Auction deadline is out of range"
                );
                ServiceError::DeadlineOutOfRange
            })?;
        let auction = self
            .repo
            .add_auction(auction, deadline)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to add auction");
                ServiceError::TemporarilyUnavailable
            })?;
        tracing::debug!(deadline = ?deadline, "Auction registered for expiry");
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::{
            repository::MockDatabase,
            service::tests::{
                get_auction_create,
                get_service,
            },
        },
        std::time::Duration,
    };

    #[tokio::test]
    async fn test_add_auction_registers_deadline() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .withf(|auction| auction.status == entities::AuctionStatus::Active)
            .times(1)
            .returning(|_| Ok(()));
        let service = get_service(db, Duration::from_secs(30), false);

        let auction = service
            .add_auction(AddAuctionInput {
                auction: get_auction_create(),
            })
            .await
            .unwrap();

        assert_eq!(
            service.repo.get_in_memory_auction(auction.id).await,
            Some(entities::TrackedAuction::new(
                entities::AuctionStatus::Active,
                auction.creation_time + Duration::from_secs(30),
            ))
        );
    }

    #[tokio::test]
    async fn test_add_auction_db_failure_is_reported_and_not_tracked() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("duplicate key value")));
        let service = get_service(db, Duration::from_secs(30), false);

        let result = service
            .add_auction(AddAuctionInput {
                auction: get_auction_create(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ServiceError::TemporarilyUnavailable);
        assert!(service.repo.get_in_memory_auctions().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_auction_with_out_of_range_duration_is_rejected() {
        let mut db = MockDatabase::default();
        db.expect_add_auction().never();
        let service = get_service(db, Duration::from_secs(3_155_760_000_000_000), false);

        let result = service
            .add_auction(AddAuctionInput {
                auction: get_auction_create(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ServiceError::DeadlineOutOfRange);
        assert!(service.repo.get_in_memory_auctions().await.is_empty());
    }
}
