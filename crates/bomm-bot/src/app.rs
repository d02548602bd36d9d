//! Application wiring and main loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use bomm_executor::PaperExecutionService;
use bomm_feed::SyntheticFeed;
use bomm_mm::MakerSession;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Paper-trading application: synthetic feed, in-memory venue, one
/// quoting session.
pub struct Application {
    config: AppConfig,
    session: MakerSession,
    started: Instant,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        let feed = Arc::new(SyntheticFeed::new(
            config.feed.start_mid,
            config.feed.step,
            config.feed.seed,
        ));
        let execution = Arc::new(PaperExecutionService::new(config.batch_execution));
        let session = MakerSession::new(config.quoter.clone(), feed, execution);

        Ok(Self {
            config,
            session,
            started: Instant::now(),
        })
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run the tick loop until ctrl-c.
    pub async fn run(&mut self) -> AppResult<()> {
        self.session.init();

        let mut tick = tokio::time::interval(Duration::from_millis(self.config.tick_interval_ms));
        let mut stats =
            tokio::time::interval(Duration::from_secs(self.config.stats_interval_secs));

        info!(
            tick_interval_ms = self.config.tick_interval_ms,
            batch = self.config.batch_execution,
            "Entering main loop"
        );

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let signals = self.session.evaluate(self.now_ms()).await;
                    for signal in &signals {
                        info!(
                            side = %signal.side,
                            price = %signal.price,
                            size = %signal.size,
                            rationale = %signal.rationale,
                            "Order placed"
                        );
                    }
                    if self.session.status().is_halted() {
                        warn!("Session halted, stopping the loop");
                        break;
                    }
                }

                _ = stats.tick() => {
                    let snapshot = self.session.snapshot();
                    match serde_json::to_string(&snapshot) {
                        Ok(json) => info!(snapshot = %json, "Session snapshot"),
                        Err(e) => warn!(error = %e, "Snapshot serialization failed"),
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        self.session.cleanup().await;
        let snapshot = self.session.snapshot();
        info!(
            fills = snapshot.fill_count,
            realized_pnl = %snapshot.realized_pnl,
            inventory = %snapshot.inventory,
            "Shut down"
        );
        Ok(())
    }
}
