//! Circulation Desk - interactive library circulation menu

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circulation_desk::{
    config::{AppConfig, LogFormat},
    seed,
    services::Services,
    shell::Shell,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config);

    tracing::info!("Starting Circulation Desk v{}", env!("CARGO_PKG_VERSION"));

    let mut services = Services::new(config.circulation.clone());
    if config.shell.seed_data {
        seed::load(&mut services)?;
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(services, stdin.lock(), io::stdout());
    shell.run()?;

    tracing::info!("Circulation Desk stopped");
    Ok(())
}

/// Logs go to stderr so they never interleave with the tables on stdout
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("circulation_desk={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}
