use {
    anyhow::anyhow,
    clap::Args,
    std::time::Duration,
};

/// Used when `AUCTION_DURATION` is missing or cannot be parsed.
pub const DEFAULT_AUCTION_DURATION: Duration = Duration::from_secs(10 * 60);

/// Longest accepted duration: a signed 64-bit count of nanoseconds, about 292 years.
pub const MAX_DURATION: Duration = Duration::from_nanos(i64::MAX as u64);

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auction Options")]
#[group(id = "Auction")]
pub struct Options {
    /// How long an auction stays active after its creation, e.g. "10m" or "1h 30m".
    /// Falls back to 10 minutes when missing or malformed.
    #[arg(long = "auction-duration")]
    #[arg(env = "AUCTION_DURATION")]
    pub auction_duration: Option<String>,

    /// How often the expiry monitor looks for elapsed auctions.
    /// Defaults to the auction duration.
    #[arg(long = "auction-check-interval")]
    #[arg(env = "AUCTION_CHECK_INTERVAL")]
    #[arg(value_parser = parse_duration)]
    pub check_interval: Option<Duration>,

    /// Keep tracking auctions whose status update failed and retry them on the next check.
    #[arg(long = "retry-failed-status-updates")]
    #[arg(env = "RETRY_FAILED_STATUS_UPDATES")]
    pub retry_failed_status_updates: bool,
}

impl Options {
    pub fn get_auction_duration(&self) -> Duration {
        parse_auction_duration(self.auction_duration.as_deref())
    }

    pub fn get_check_interval(&self) -> Duration {
        self.check_interval
            .unwrap_or_else(|| self.get_auction_duration())
    }
}

pub fn parse_duration(value: &str) -> anyhow::Result<Duration> {
    let duration = humantime::parse_duration(value.trim())?;
    if duration > MAX_DURATION {
        return Err(anyhow!(
            "Duration {} exceeds the maximum of {}",
            value.trim(),
            humantime::format_duration(MAX_DURATION)
        ));
    }
    Ok(duration)
}

pub fn parse_auction_duration(value: Option<&str>) -> Duration {
    value
        .and_then(|value| parse_duration(value).ok())
        .unwrap_or(DEFAULT_AUCTION_DURATION)
}
