//! multidiff - compare several files against one base file
//!
//! Binary entry point: reads the files, prints the report.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use multidiff::compare::NdiffComparator;
use multidiff::constants::DEFAULT_WIDTH;
use multidiff::model::Document;
use multidiff::{MultiDiff, RenderConfig};

/// Line-level diff algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Myers,
    Patience,
    Lcs,
}

impl From<Algorithm> for similar::Algorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Myers => Self::Myers,
            Algorithm::Patience => Self::Patience,
            Algorithm::Lcs => Self::Lcs,
        }
    }
}

/// Show how several files differ from one base file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File every other file is compared against
    base: PathBuf,

    /// Files to compare with the base
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Disable ANSI colors (raw emphasis masks are shown instead)
    #[arg(long)]
    no_color: bool,

    /// Maximum line width (defaults to the terminal width)
    #[arg(long)]
    width: Option<usize>,

    /// Line-level diff algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::Myers)]
    algorithm: Algorithm,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RenderConfig::default()
        .with_colored(use_color(cli.no_color))
        .with_width(cli.width.unwrap_or_else(terminal_width));

    let base = Document::from_path(&cli.base)?;
    let candidates = cli
        .files
        .iter()
        .map(Document::from_path)
        .collect::<multidiff::Result<Vec<_>>>()?;

    let comparator = NdiffComparator::new().with_algorithm(cli.algorithm.into());
    let diff = MultiDiff::compare(base, candidates, &comparator);
    println!("{}", diff.render(&config));

    Ok(())
}

/// Color only on a terminal, and never when `NO_COLOR` is set
fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Current terminal width, or [`DEFAULT_WIDTH`] when it cannot be detected
fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        _ => DEFAULT_WIDTH,
    }
}
