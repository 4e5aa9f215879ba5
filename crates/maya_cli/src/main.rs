//! Maya CLI - render component documents and views to HTML
//!
//! ```text
//! maya render header.json --theme dark --device mobile
//! maya home --config maya.toml
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use maya_app::{AppConfig, Document, HomePage};
use maya_theme::{DeviceType, ThemeManager, ThemeState};
use tracing_subscriber::EnvFilter;

/// Configuration file picked up from the working directory
const DEFAULT_CONFIG: &str = "maya.toml";

/// Render Maya UI components to HTML
#[derive(Parser, Debug)]
#[command(name = "maya")]
#[command(about = "Render Maya UI components to HTML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    theme: ThemeArgs,
}

#[derive(Args, Debug)]
struct ThemeArgs {
    /// Configuration file (defaults to ./maya.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme name
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Device class: computer, tablet or mobile
    #[arg(long, global = true)]
    device: Option<DeviceType>,

    /// Viewport width in pixels, used for grid breakpoints
    #[arg(long, global = true)]
    width: Option<f32>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON component document
    Render {
        /// Path to the document
        document: PathBuf,
    },
    /// Render the home page showcase
    Home,
}

fn load_config(args: &ThemeArgs) -> Result<AppConfig> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => {
            AppConfig::load(Path::new(DEFAULT_CONFIG)).context("failed to load ./maya.toml")?
        }
        None => AppConfig::default(),
    };

    // A viewport width implies a device class unless one was given
    let device = args
        .device
        .or_else(|| args.width.map(DeviceType::for_width));

    let mut config = config.with_overrides(args.theme.clone(), device);
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.theme)?;

    ThemeState::init(&config.theme);
    let manager = ThemeManager::global().context("theme state is not initialized")?;
    tracing::info!(
        "rendering with theme {} on {}",
        manager.theme(),
        manager.device()
    );

    let html = match cli.command {
        Commands::Render { document } => {
            let doc = Document::load(&document)
                .with_context(|| format!("failed to read document {}", document.display()))?;
            let html = doc.to_html(&manager);
            if html.is_empty() {
                tracing::warn!("{} rendered nothing", document.display());
            }
            html
        }
        Commands::Home => HomePage::new(config.breakpoint())
            .render(&manager)
            .to_html(),
    };

    println!("{html}");
    Ok(())
}
