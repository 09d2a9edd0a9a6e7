//! # BFOOD Waiter Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Startup Sequence                                  │
//! │                                                                         │
//! │  1. Initialize logging (stderr, RUST_LOG)                               │
//! │  2. Load WaiterConfig (defaults → waiter.toml → BFOOD_* env)            │
//! │  3. Build the API client                                                │
//! │  4. Fetch categories + products                                         │
//! │  5. Read commands from stdin until `quit`                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! waiter [path/to/waiter.toml]
//! ```

use std::path::PathBuf;

use tracing::info;

use bfood_api::ApiClient;
use waiter::state::WaiterConfig;
use waiter::terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    waiter::init_tracing();

    info!("Starting BFOOD waiter");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = WaiterConfig::load(config_path)?;
    info!(base_url = %config.api.base_url, "Configuration loaded");

    let client = ApiClient::new(&config.api)?;

    Terminal::new(client, config.display).run().await?;
    Ok(())
}
