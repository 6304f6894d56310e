use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use stormtrack_app::{loader, Controller};
use stormtrack_core::config::Config;
use stormtrack_core::detect::{detect, DetectionMethod};
use stormtrack_core::SourceVariant;
use stormtrack_sources::{export, fetch, Hurdat2};

#[derive(Parser)]
#[command(name = "stormtrack", about = "Hurricane tracks and Florida landfalls by year")]
struct Cli {
    /// Write debug logs to /tmp/stormtrack-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Extra config file layered over ~/.config/stormtrack/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the years that have landfalls, most recent first.
    Years {
        #[arg(long)]
        variant: Option<SourceVariant>,
    },
    /// Print the render frame for one year as JSON.
    Show {
        /// Defaults to the most recent landfall year. A tabular landfall
        /// file is only read for this year.
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        variant: Option<SourceVariant>,
    },
    /// Convert HURDAT2 text to the track JSON source.
    Tracks {
        #[arg(long, value_name = "FILE")]
        hurdat: PathBuf,
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract landfalls from HURDAT2 text into the tabular source.
    Extract {
        #[arg(long, value_name = "FILE")]
        hurdat: PathBuf,
        /// using-l, without-l, or first-on-land.
        #[arg(long)]
        method: DetectionMethod,
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/stormtrack-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("stormtrack debug log started; tail -f /tmp/stormtrack-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}

fn output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match out {
        Some(path) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    })
}

async fn loaded_controller(config: &Config) -> Controller {
    let mut controller = Controller::new(config);
    for applied in loader::load_all(&mut controller, config).await {
        tracing::debug!(?applied, "startup load");
    }
    controller
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Command::Years { variant } => {
            if let Some(variant) = variant {
                config.sources.variant = variant;
            }
            let controller = loaded_controller(&config).await;
            let mut out = output(None)?;
            for year in controller.years() {
                writeln!(out, "{year}")?;
            }
        }
        Command::Show { year, variant } => {
            if let Some(variant) = variant {
                config.sources.variant = variant;
            }
            let controller = match year {
                Some(year) => {
                    let mut controller = Controller::new(&config);
                    for applied in loader::load_year(&mut controller, &config, &year).await {
                        tracing::debug!(?applied, %year, "startup load");
                    }
                    controller
                }
                None => loaded_controller(&config).await,
            };
            let mut out = output(None)?;
            serde_json::to_writer_pretty(&mut out, &controller.frame())?;
            writeln!(out)?;
        }
        Command::Tracks { hurdat, out } => {
            let tracks = fetch::load(&Hurdat2, &hurdat).await?;
            tracing::info!(storms = tracks.len(), "hurdat2 parsed");
            let mut out = output(out.as_deref())?;
            serde_json::to_writer(&mut out, &export::tracks_to_json(&tracks))?;
            out.flush()?;
        }
        Command::Extract { hurdat, method, out } => {
            let tracks = fetch::load(&Hurdat2, &hurdat).await?;
            let events = detect(&tracks, method, &config.detect_options());
            tracing::info!(storms = tracks.len(), landfalls = events.len(), ?method, "landfalls extracted");
            export::write_landfalls_csv(&events, output(out.as_deref())?)?;
        }
    }

    Ok(())
}
