use {
    super::Service,
    anyhow::{
        anyhow,
        Result,
    },
    std::time::Duration,
    time::OffsetDateTime,
    tokio::{
        task::JoinHandle,
        time::{
            Instant,
            MissedTickBehavior,
        },
    },
    tokio_util::sync::CancellationToken,
};

impl Service {
    pub async fn run_expiry_monitor_loop(
        &self,
        check_interval: Duration,
        cancellation_token: CancellationToken,
    ) -> Result<()> {
        if check_interval.is_zero() {
            return Err(anyhow!("Auction check interval must be greater than zero"));
        }
        let first_check = Instant::now().checked_add(check_interval).ok_or_else(|| {
            anyhow!(
                "Auction check interval {:?} is too large to schedule",
                check_interval
            )
        })?;
        tracing::info!(
            check_interval = ?check_interval,
            auction_duration = ?self.config.auction_duration,
            "Starting auction expiry monitor..."
        );

        // The first pass happens one interval after startup, not immediately.
        let mut check_expiry_interval = tokio::time::interval_at(first_check, check_interval);
        check_expiry_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancellation_token.cancelled() => break,
                _ = check_expiry_interval.tick() => {
                    let concluded = self.conclude_expired_auctions(OffsetDateTime::now_utc()).await;
                    if concluded > 0 {
                        tracing::debug!(concluded, "Expiry pass finished");
                    }
                }
            }
        }
        tracing::info!("Shutting down auction expiry monitor...");
        Ok(())
    }

    pub fn start_expiry_monitor(
        &self,
        check_interval: Duration,
        cancellation_token: CancellationToken,
    ) -> JoinHandle<Result<()>> {
        self.task_tracker.spawn({
            let service = self.clone();
            async move {
                service
                    .run_expiry_monitor_loop(check_interval, cancellation_token)
                    .await
            }
        })
    }
}
