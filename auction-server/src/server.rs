use {
    crate::{
        auction::service::{
            Config,
            Service,
        },
        config::{
            MigrateOptions,
            RunOptions,
        },
        kernel::db,
    },
    std::future::Future,
    tokio_util::{
        sync::CancellationToken,
        task::TaskTracker,
    },
};

/// Cancels the token once `signal` resolves. If listening for the signal fails the token is
/// left untouched so the server keeps running.
async fn cancel_on_shutdown_signal(
    signal: impl Future<Output = std::io::Result<()>>,
    cancellation_token: CancellationToken,
) {
    match signal.await {
        Ok(()) => {
            tracing::info!("Shut down signal received, waiting for tasks...");
            cancellation_token.cancel();
        }
        Err(e) => {
            tracing::error!(error = ?e, "Failed to listen for the shutdown signal");
        }
    }
}

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    let cancellation_token = CancellationToken::new();
    tracing::info!("Registered shutdown signal handler...");
    tokio::spawn(cancel_on_shutdown_signal(
        tokio::signal::ctrl_c(),
        cancellation_token.clone(),
    ));

    let auction_duration = run_options.auction.get_auction_duration();
    let check_interval = run_options.auction.get_check_interval();
    tracing::info!(
        auction_duration = ?auction_duration,
        check_interval = ?check_interval,
        retry_failed_status_updates = run_options.auction.retry_failed_status_updates,
        "Loaded auction configuration"
    );

    let db = db::connect(&run_options.database).await?;
    let task_tracker = TaskTracker::new();
    let service = Service::new(
        db,
        Config {
            auction_duration,
            retry_failed_status_updates: run_options.auction.retry_failed_status_updates,
        },
        task_tracker.clone(),
    );
    service.restore_active_auctions().await?;

    let monitor = service.start_expiry_monitor(check_interval, cancellation_token.clone());
    task_tracker.close();

    let result = monitor.await?;
    task_tracker.wait().await;
    tracing::info!("Auction expiry server stopped");
    result
}

pub async fn run_migrations(migrate_options: MigrateOptions) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");
    let db = db::connect(&migrate_options.database).await?;
    db::migrate(&db).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::io,
    };

    #[tokio::test]
    async fn test_shutdown_signal_cancels_token() {
        let cancellation_token = CancellationToken::new();
        cancel_on_shutdown_signal(async { Ok(()) }, cancellation_token.clone()).await;
        assert!(cancellation_token.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_listener_keeps_token_alive() {
        let cancellation_token = CancellationToken::new();
        cancel_on_shutdown_signal(
            async { Err(io::Error::new(io::ErrorKind::Other, "signal driver unavailable")) },
            cancellation_token.clone(),
        )
        .await;
        assert!(!cancellation_token.is_cancelled());
    }
}
