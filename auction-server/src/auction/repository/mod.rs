use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

mod add_auction;
mod get_active_auctions;
mod get_expired_in_memory_auctions;
mod get_in_memory_auctions;
mod mark_in_memory_auction_completed;
mod models;
mod reactivate_in_memory_auction;
mod remove_in_memory_auction;
mod update_auction_status;

pub use models::*;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    auctions: RwLock<HashMap<entities::AuctionId, entities::TrackedAuction>>,
}

#[derive(Debug)]
pub struct Repository {
    in_memory_store: InMemoryStore,
    db:              Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db:              Box::new(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::time::Duration,
        time::OffsetDateTime,
        uuid::Uuid,
    };

    fn get_tracked_auction(deadline: OffsetDateTime) -> entities::TrackedAuction {
        entities::TrackedAuction::new(entities::AuctionStatus::Active, deadline)
    }

    #[tokio::test]
    async fn test_add_in_memory_auction_rejects_known_id() {
        let repo = Repository::new(MockDatabase::default());
        let auction_id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();

        assert!(repo.add_in_memory_auction(auction_id, get_tracked_auction(now)).await);
        assert!(
            !repo
                .add_in_memory_auction(auction_id, get_tracked_auction(now + Duration::from_secs(5)))
                .await
        );
        assert_eq!(
            repo.get_in_memory_auction(auction_id).await,
            Some(get_tracked_auction(now))
        );
    }

    #[tokio::test]
    async fn test_get_expired_in_memory_auctions_uses_strict_deadline() {
        let repo = Repository::new(MockDatabase::default());
        let now = OffsetDateTime::now_utc();
        let expired_id = Uuid::new_v4();
        let due_now_id = Uuid::new_v4();
        let future_id = Uuid::new_v4();
        repo.add_in_memory_auction(expired_id, get_tracked_auction(now - Duration::from_secs(1)))
            .await;
        repo.add_in_memory_auction(due_now_id, get_tracked_auction(now))
            .await;
        repo.add_in_memory_auction(future_id, get_tracked_auction(now + Duration::from_secs(1)))
            .await;

        assert_eq!(
            repo.get_expired_in_memory_auctions(now).await,
            vec![expired_id]
        );
    }

    #[tokio::test]
    async fn test_mark_in_memory_auction_completed_only_once() {
        let repo = Repository::new(MockDatabase::default());
        let auction_id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        repo.add_in_memory_auction(auction_id, get_tracked_auction(now - Duration::from_secs(1)))
            .await;

        assert!(repo.mark_in_memory_auction_completed(auction_id).await);
        assert!(!repo.mark_in_memory_auction_completed(auction_id).await);
        assert_eq!(
            repo.get_in_memory_auction(auction_id)
                .await
                .map(|auction| auction.status),
            Some(entities::AuctionStatus::Completed)
        );
        // A completed entry that is still awaiting eviction is not reported again.
        assert!(repo.get_expired_in_memory_auctions(now).await.is_empty());

        repo.remove_in_memory_auction(auction_id).await;
        assert!(repo.get_in_memory_auction(auction_id).await.is_none());
        assert!(!repo.mark_in_memory_auction_completed(auction_id).await);
    }

    #[tokio::test]
    async fn test_reactivate_in_memory_auction() {
        let repo = Repository::new(MockDatabase::default());
        let auction_id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        repo.add_in_memory_auction(auction_id, get_tracked_auction(now - Duration::from_secs(1)))
            .await;

        repo.mark_in_memory_auction_completed(auction_id).await;
        repo.reactivate_in_memory_auction(auction_id).await;

        assert_eq!(
            repo.get_expired_in_memory_auctions(now).await,
            vec![auction_id]
        );
    }

    #[tokio::test]
    async fn test_add_auction_does_not_register_on_db_failure() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        let repo = Repository::new(db);
        let auction = entities::Auction::new_with_current_time(entities::AuctionCreate {
            product_name: "Camera".to_string(),
            category:     "Electronics".to_string(),
            description:  "Mirrorless camera body".to_string(),
            condition:    entities::ProductCondition::New,
        });
        let deadline = auction.get_deadline(Duration::from_secs(60)).unwrap();

        assert!(repo.add_auction(auction.clone(), deadline).await.is_err());
        assert!(repo.get_in_memory_auction(auction.id).await.is_none());
        assert!(repo.get_in_memory_auctions().await.is_empty());
    }
}
