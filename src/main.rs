use std::process::ExitCode;

use tokio::spawn;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use heartbeat::monitor::monitor_heartbeat;

// Conventional status for a process stopped by SIGINT.
const INTERRUPTED: u8 = 130;


#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the readings, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cancel = CancellationToken::new();
    spawn(stop_on_interrupt(cancel.clone()));

    match monitor_heartbeat(cancel).await {
        Ok(()) => ExitCode::from(INTERRUPTED),
        Err(err) => {
            error!("Heartbeat monitor failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn stop_on_interrupt(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Interrupt received, stopping");
            cancel.cancel();
        }
        Err(err) => error!("Unable to listen for interrupt: {err}"),
    }
}
