#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::kernel::db::DB,
    async_trait::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::OffsetDateTime,
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => AuctionStatus::Active,
            entities::AuctionStatus::Completed => AuctionStatus::Completed,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Active => entities::AuctionStatus::Active,
            AuctionStatus::Completed => entities::AuctionStatus::Completed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "product_condition", rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl From<entities::ProductCondition> for ProductCondition {
    fn from(condition: entities::ProductCondition) -> Self {
        match condition {
            entities::ProductCondition::New => ProductCondition::New,
            entities::ProductCondition::Used => ProductCondition::Used,
            entities::ProductCondition::Refurbished => ProductCondition::Refurbished,
        }
    }
}

impl From<ProductCondition> for entities::ProductCondition {
    fn from(condition: ProductCondition) -> Self {
        match condition {
            ProductCondition::New => entities::ProductCondition::New,
            ProductCondition::Used => entities::ProductCondition::Used,
            ProductCondition::Refurbished => entities::ProductCondition::Refurbished,
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Auction {
    pub id:                 entities::AuctionId,
    pub product_name:       String,
    pub category:           String,
    pub description:        String,
    pub condition:          ProductCondition,
    pub status:             AuctionStatus,
    /// Unix timestamp in seconds.
    pub creation_timestamp: i64,
}

impl From<&entities::Auction> for Auction {
    fn from(auction: &entities::Auction) -> Self {
        Self {
            id:                 auction.id,
            product_name:       auction.product_name.clone(),
            category:           auction.category.clone(),
            description:        auction.description.clone(),
            condition:          auction.condition.into(),
            status:             auction.status.into(),
            creation_timestamp: auction.creation_time.unix_timestamp(),
        }
    }
}

impl TryFrom<Auction> for entities::Auction {
    type Error = anyhow::Error;

    fn try_from(auction: Auction) -> Result<Self, Self::Error> {
        let created_at = OffsetDateTime::from_unix_timestamp(auction.creation_timestamp)
            .map_err(|e| {
                anyhow::anyhow!(
                    "Invalid creation timestamp {} for auction {}: {:?}",
                    auction.creation_timestamp,
                    auction.id,
                    e
                )
            })?;
        Ok(Self {
            id:            auction.id,
            product_name:  auction.product_name,
            category:      auction.category,
            description:   auction.description,
            condition:     auction.condition.into(),
            status:        auction.status.into(),
            creation_time: created_at,
        })
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_auction(&self, auction: &entities::Auction) -> anyhow::Result<()>;
    async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        status: entities::AuctionStatus,
    ) -> anyhow::Result<()>;
    async fn get_active_auctions(&self) -> anyhow::Result<Vec<entities::Auction>>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_add_auction",
        fields(
            category = "db_queries",
            result = "success",
            name = "add_auction",
            tracing_enabled
        ),
        skip_all
    )]
    async fn add_auction(&self, auction: &entities::Auction) -> anyhow::Result<()> {
        let auction = Auction::from(auction);
        sqlx::query(
            "INSERT INTO auction (id, product_name, category, description, condition, status, creation_timestamp) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(auction.id)
        .bind(&auction.product_name)
        .bind(&auction.category)
        .bind(&auction.description)
        .bind(auction.condition)
        .bind(auction.status)
        .bind(auction.creation_timestamp)
        .execute(self)
        .await
        .inspect_err(|_| {
            tracing::Span::current().record("result", "error");
        })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_update_auction_status",
        fields(
            category = "db_queries",
            result = "success",
            name = "update_auction_status",
            tracing_enabled
        ),
        skip_all
    )]
    async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        status: entities::AuctionStatus,
    ) -> anyhow::Result<()> {
        sqlx::query("UPDATE auction SET status = $1 WHERE id = $2")
            .bind(AuctionStatus::from(status))
            .bind(auction_id)
            .execute(self)
            .await
            .inspect_err(|_| {
                tracing::Span::current().record("result", "error");
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_active_auctions",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_active_auctions",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_active_auctions(&self) -> anyhow::Result<Vec<entities::Auction>> {
        let auctions: Vec<Auction> = sqlx::query_as("SELECT * FROM auction WHERE status = $1")
            .bind(AuctionStatus::Active)
            .fetch_all(self)
            .await
            .inspect_err(|_| {
                tracing::Span::current().record("result", "error");
            })?;
        auctions.into_iter().map(|auction| auction.try_into()).collect()
    }
}
