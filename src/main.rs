use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use torus_snake::game::GameConfig;
use torus_snake::modes::{HumanMode, OutputFormat, ReplayMode};
use torus_snake::telemetry;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON game configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    cols: Option<usize>,

    /// Grid height
    #[arg(long)]
    rows: Option<usize>,

    /// Milliseconds between ticks (human mode)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Move script for replay mode, e.g. "..U..L.."
    #[arg(long)]
    script: Option<String>,

    /// Replay output format
    #[arg(long, default_value = "json")]
    format: Format,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Run a move script headless and print the final state
    Replay,
}

#[derive(Clone, ValueEnum)]
enum Format {
    Json,
    Ascii,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Ascii => OutputFormat::Ascii,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config()?;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Replay => {
            let Some(script) = cli.script.as_deref() else {
                bail!("--script is required in replay mode");
            };
            let output = ReplayMode::new(config).run_to_string(script, cli.format.clone().into())?;
            print!("{output}");
        }
    }

    Ok(())
}
