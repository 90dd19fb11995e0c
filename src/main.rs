use std::sync::Arc;

use cricket_live::config::Config;
use cricket_live::poller::{LivePoller, ViewState};
use cricket_live::render;
use cricket_live::service::DataService;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_MATCH_ID: &str = "zim-durham";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr so stdout only carries the rendered views
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::from_env()?;
    let match_id = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_MATCH_ID.to_string());
    let service = Arc::new(DataService::from_config(&config)?);
    let tz = config.display_tz;

    let poller = LivePoller::new(service, match_id.clone(), config.poll_interval);
    let handle = poller.spawn(move |state| {
        if let ViewState::Ready(view) = state.view() {
            match serde_json::to_value(view) {
                Ok(value) => println!("{}", render::render_ticker(&value)),
                Err(e) => error!(error = %e, "Failed to serialize live view for ticker"),
            }
        }
        println!("{}\n", render::render_state(state, tz));
    });

    tokio::signal::ctrl_c().await?;
    info!(match_id = %match_id, "Shutting down");
    handle.stop();
    Ok(())
}
