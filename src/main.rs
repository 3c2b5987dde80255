/// Main entry point for the market clock
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use openbell::{config::load_config, MarketClock};

const CONFIG_PATH: &str = "openbell.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(CONFIG_PATH)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(format!("openbell={},info", config.log_level))
        .init();

    info!("Starting market clock (refresh every {}s)", config.refresh_secs);

    let clock = MarketClock::new()?;
    let refresh = std::time::Duration::from_secs(config.refresh_secs);
    let shutdown = Arc::new(RwLock::new(false));

    // Setup graceful shutdown handler
    {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move {
            // Wait for Ctrl+C
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for Ctrl+C");

            info!("Ctrl+C received - shutting down");
            let mut flag = shutdown.write().await;
            *flag = true;
        });
    }

    // Poll loop. The engine exposes a pure function and owns no timer;
    // cadence lives here with the caller.
    loop {
        {
            let shutdown = shutdown.read().await;
            if *shutdown {
                break;
            }
        }

        let snap = clock.snapshot(chrono::Utc::now());
        println!(
            "{:13} | NY {} | {} {} | {} {} | NEXT: {}",
            snap.status_label,
            snap.ny_clock,
            snap.local_tz_abbr,
            snap.local_clock,
            snap.countdown_label,
            snap.countdown,
            snap.next_trading_day
        );

        tokio::time::sleep(refresh).await;
    }

    info!("Market clock stopped");
    Ok(())
}
