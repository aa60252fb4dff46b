use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use user_roster::config::{Config, ConfigOverrides};

/// Terminal screen that loads a user list from a simulated backend.
#[derive(Debug, Parser)]
#[command(name = "user-roster", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the simulated failure generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a normal fetch fails, between 0 and 1.
    #[arg(long)]
    failure_probability: Option<f64>,

    /// Delay of the normal fetch in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            failure_probability: self.failure_probability,
            delay_ms: self.delay_ms,
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.apply_overrides(cli.overrides());
    config.validate().context("invalid command-line override")?;

    user_roster::logging::init(&config.logging)?;
    tracing::info!(config = %path.display(), "Starting user roster");

    user_roster::ui::runtime::run(&config).await?;
    Ok(())
}
