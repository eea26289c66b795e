use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::{HeadlessMode, TerminalMode};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake for a framebuffer panel and a joystick")]
struct Cli {
    /// Where the game runs
    #[arg(long, default_value = "terminal")]
    mode: Mode,

    /// TOML file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for target placement (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sessions to play in headless mode
    #[arg(long, default_value = "1")]
    sessions: u32,

    /// Pace headless sessions in real time instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Log file for terminal mode (the panel owns stderr)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal with the keyboard as the stick
    Terminal,
    /// Run sessions with no panel and no input
    Headless,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging(mode: &Mode, log_file: &Path) -> Result<()> {
    match mode {
        Mode::Terminal => {
            let file = File::create(log_file)
                .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Mode::Headless => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.mode, &cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate().context("Invalid configuration")?;

    match cli.mode {
        Mode::Terminal => {
            let mut terminal_mode = TerminalMode::new(config);
            terminal_mode.run().await?;
        }
        Mode::Headless => {
            let headless = HeadlessMode::new(config, cli.sessions, cli.realtime);
            let scores = tokio::task::spawn_blocking(move || headless.run())
                .await
                .context("Headless run panicked")??;
            info!(?scores, "final scores");
        }
    }

    Ok(())
}
