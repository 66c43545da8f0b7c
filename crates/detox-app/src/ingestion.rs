//! Usage-data providers.
//!
//! The controller takes any [`UsageProvider`], so the simulated analyzer
//! and its fixed delay stay out of the evaluation path and tests can feed
//! deterministic snapshots without timers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use detox_common::config::AppConfig;
use detox_common::{Result, UsageSnapshot};

/// Asynchronous source of a day's usage snapshot.
#[async_trait]
pub trait UsageProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<UsageSnapshot>;
}

/// Stand-in for a real device screen-time API: waits a fixed delay, then
/// returns a canned measurement. It cannot fail and is not cancellable;
/// overlapping fetches simply complete in order (last write wins once
/// submitted).
pub struct ScreenshotAnalyzer {
    delay: Duration,
}

impl ScreenshotAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_secs(config.analysis_delay_seconds))
    }
}

#[async_trait]
impl UsageProvider for ScreenshotAnalyzer {
    async fn fetch_snapshot(&self) -> Result<UsageSnapshot> {
        info!("analyzing screenshot ({}s)", self.delay.as_secs());
        tokio::time::sleep(self.delay).await;

        Ok(UsageSnapshot::new(180)
            .with_app("Instagram", 45)
            .with_app("YouTube", 60)
            .with_app("KakaoTalk", 30)
            .with_app("Safari", 45))
    }
}

/// Returns a pre-set snapshot immediately. Test double for the analyzer.
pub struct FixedProvider {
    snapshot: UsageSnapshot,
}

impl FixedProvider {
    pub fn new(snapshot: UsageSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl UsageProvider for FixedProvider {
    async fn fetch_snapshot(&self) -> Result<UsageSnapshot> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_analyzer_returns_canned_payload_after_delay() {
        let analyzer = ScreenshotAnalyzer::new(Duration::from_secs(2));
        let snapshot = analyzer.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.total_minutes, 180);
        assert_eq!(snapshot.minutes_for("Instagram"), 45);
        assert_eq!(snapshot.minutes_for("YouTube"), 60);
        assert_eq!(snapshot.minutes_for("KakaoTalk"), 30);
        assert_eq!(snapshot.minutes_for("Safari"), 45);
    }

    #[tokio::test]
    async fn test_fixed_provider_is_immediate() {
        let provider = FixedProvider::new(UsageSnapshot::new(42));
        let snapshot = provider.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.total_minutes, 42);
    }
}
