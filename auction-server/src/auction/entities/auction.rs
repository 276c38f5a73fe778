use {
    std::time::Duration,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Active,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:            AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     ProductCondition,
    pub status:        AuctionStatus,
    pub creation_time: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct AuctionCreate {
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
}

impl Auction {
    pub fn new_with_current_time(auction: AuctionCreate) -> Self {
        Self {
            id:            Uuid::new_v4(),
            product_name:  auction.product_name,
            category:      auction.category,
            description:   auction.description,
            condition:     auction.condition,
            status:        AuctionStatus::Active,
            creation_time: OffsetDateTime::now_utc(),
        }
    }

    /// Returns None when the deadline falls outside the representable date range.
    pub fn get_deadline(&self, auction_duration: Duration) -> Option<OffsetDateTime> {
        let auction_duration = time::Duration::try_from(auction_duration).ok()?;
        self.creation_time.checked_add(auction_duration)
    }
}

/// In-memory view of an auction kept by the expiry monitor.
///
/// The status and the deadline live in the same entry so an auction can never be
/// tracked by one without the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackedAuction {
    pub status:   AuctionStatus,
    pub deadline: OffsetDateTime,
}

impl TrackedAuction {
    pub fn new(status: AuctionStatus, deadline: OffsetDateTime) -> Self {
        Self { status, deadline }
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.deadline < now
    }
}
