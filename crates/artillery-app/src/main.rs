use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use artillery_sim::GameConfig;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artillery=warn")))
        .init();

    info!("Artillery {}", env!("CARGO_PKG_VERSION"));

    artillery_app::run(GameConfig::default())?;
    Ok(())
}
