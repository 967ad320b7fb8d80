mod animation;
mod config;
mod content;
mod error;
mod icons;
mod tui;

use std::io::{stdout, Write};

use clap::{Args, Parser, Subcommand};
use config::{Config, Overrides};
use content::CONTENT;
use error::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::state::{PageId, ThemeMode};

#[derive(Parser)]
#[command(name = "portfolio-tui")]
#[command(about = "Personal portfolio as a terminal UI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio interactively (default)
    Tui(ViewArgs),
    /// Print one page as plain text
    Print {
        #[arg(long, value_enum, default_value_t = PageId::Home)]
        page: PageId,
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..=400))]
        width: u16,
    },
    /// Write the portfolio content as JSON
    Export,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Tui(ViewArgs::default())
    }
}

#[derive(Args, Default)]
struct ViewArgs {
    /// Start in this theme (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
    /// Start on this section (overrides the config file)
    #[arg(long, value_enum)]
    page: Option<PageId>,
    /// Skip entrance animations
    #[arg(long)]
    no_animation: bool,
}

fn init_logging() -> Result<()> {
    let log_file = std::fs::File::create(std::env::temp_dir().join("portfolio-tui.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio_tui=info")),
        )
        .with_writer(log_file)
        .with_ansi(true)
        .with_target(false)
        .pretty()
        .init();
    Ok(())
}

async fn run_tui(args: ViewArgs) -> Result<()> {
    let settings = Config::load()?.resolve(Overrides {
        theme: args.theme,
        page: args.page,
        no_animation: args.no_animation,
    });
    tui::run(settings).await
}

fn print_page(page: PageId, width: u16) -> Result<()> {
    info!(?page, width, "printing page");
    let mut out = stdout().lock();
    out.write_all(tui::print::page_text(page, width).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn export() -> Result<()> {
    info!("exporting content");
    let json = serde_json::to_string_pretty(&CONTENT)?;
    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file.
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let result = match cli.command.unwrap_or_default() {
        Commands::Tui(args) => run_tui(args).await,
        Commands::Print { page, width } => print_page(page, width),
        Commands::Export => export(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
