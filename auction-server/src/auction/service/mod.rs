use {
    super::repository::{
        Database,
        Repository,
    },
    std::{
        sync::Arc,
        time::Duration,
    },
    tokio_util::task::TaskTracker,
};

pub mod add_auction;
pub mod conclude_auction;
pub mod conclude_expired_auctions;
pub mod error;
pub mod restore_active_auctions;
pub mod workers;

pub use error::ServiceError;

#[derive(Clone, Debug)]
pub struct Config {
    /// How long an auction stays active after its creation.
    pub auction_duration:            Duration,
    /// Keep auctions whose status update failed so the next expiry pass retries them.
    pub retry_failed_status_updates: bool,
}

pub struct ServiceInner {
    config:       Config,
    repo:         Arc<Repository>,
    task_tracker: TaskTracker,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(db: impl Database, config: Config, task_tracker: TaskTracker) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new(db)),
            task_tracker,
        }))
    }
}
