//! Service availability checks.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use pathway_core::{
    ApiConfig, Availability, AvailabilityMonitor, AvailabilityStatus, HttpBackend,
    RecommendBackend,
};

/// Status arguments.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Keep watching and print every probe result until interrupted
    #[arg(long)]
    pub watch: bool,

    /// Seconds between probes in watch mode
    #[arg(long, default_value_t = 30)]
    pub interval: u64,
}

/// Run a one-shot probe, or watch continuously with `--watch`.
pub async fn run(args: StatusArgs) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(ApiConfig::from_env()));

    if !args.watch {
        let healthy = backend.check_health().await;
        println!(
            "{} is {}",
            backend.base_url(),
            if healthy { "online" } else { "offline" }
        );
        return Ok(());
    }

    println!("Watching {} (Ctrl-C to stop)", backend.base_url());
    let mut monitor =
        AvailabilityMonitor::with_interval(backend, Duration::from_secs(args.interval.max(1)));
    let mut events = monitor.subscribe();
    monitor.start();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => {
                match event {
                    Ok(availability) => print_probe(&availability),
                    Err(_) => break,
                }
            }
        }
    }

    monitor.stop();
    Ok(())
}

fn print_probe(availability: &Availability) {
    let label = match availability.status {
        AvailabilityStatus::Checking => "checking",
        AvailabilityStatus::Online => "online",
        AvailabilityStatus::Offline => "offline",
    };
    let checked_at = availability
        .last_checked
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    println!("[{checked_at}] {label}");
}
