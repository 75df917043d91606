use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::display::write_heartbeat;
use crate::fake::{measure_heartbeat, EntropySource, RandomSource, MAX_BPM, MIN_BPM};


pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);


pub struct HeartbeatMonitor<R, W> {
    source: R,
    out: W,
}

impl<R: RandomSource, W: Write> HeartbeatMonitor<R, W> {
    pub fn new(source: R, out: W) -> Self {
        HeartbeatMonitor {
            source,
            out,
        }
    }

    /// Samples, prints, sleeps. Only returns once `cancel` fires or the
    /// output can no longer be written to.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<()> {
        info!(
            "Heartbeat monitor started (range={}..={} bpm, interval={:?})",
            MIN_BPM, MAX_BPM, SAMPLE_INTERVAL
        );

        while !cancel.is_cancelled() {
            let heart_rate = measure_heartbeat(&mut self.source);
            debug!(heart_rate, "sampled");

            write_heartbeat(&mut self.out, heart_rate)
                .with_context(|| format!("failed to write heartbeat {heart_rate}"))?;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(SAMPLE_INTERVAL) => {}
            }
        }

        info!("Heartbeat monitor stopped");
        Ok(())
    }
}

pub async fn monitor_heartbeat(cancel: CancellationToken) -> Result<()> {
    let mut monitor = HeartbeatMonitor::new(EntropySource::new(), io::stdout());
    monitor.run(cancel).await
}
