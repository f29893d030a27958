//! tint - color inspection and conversion CLI
//!
//! Thin front end over `tint-core`: parse a color, report its derived
//! values, move it between linear/sRGB and float/byte forms, clamp it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::InputColor;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color inspection and conversion")]
#[command(long_about = "
Inspect and convert colors.

Colors are given either as hex bytes (#rrggbb, #rrggbbaa) or as
3 or 4 comma-separated floats (0.5,0.25,1 or 0.5,0.25,1,0.5).

Examples:
  tint info '#ff8000'                 # Show derived values
  tint info 0.18,0.18,0.18 --json     # Machine-readable output
  tint convert 0.18,0.5,1 --to srgb   # Linear -> sRGB
  tint convert '#808080' --to linear  # sRGB bytes -> linear floats
  tint convert 2,0.5,-1 --to bytes    # Round and clamp to bytes
  tint clamp -1,0.5,2 --max 0.9       # Clamp float channels

Set RUST_LOG to control log output (e.g. RUST_LOG=debug).
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display derived values of a color (sum, gray, luma, flags)
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert between linear/sRGB and float/byte forms
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Clamp float channels to a range
    Clamp(ClampArgs),
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Color: #rrggbb[aa] or r,g,b[,a]
    #[arg(allow_hyphen_values = true)]
    color: InputColor,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Target form for the `convert` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Decode sRGB to linear floats
    Linear,
    /// Encode linear floats to sRGB
    Srgb,
    /// Round and clamp to bytes
    Bytes,
    /// Expand bytes to floats
    Float,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Color: #rrggbb[aa] or r,g,b[,a]
    #[arg(allow_hyphen_values = true)]
    color: InputColor,

    /// Target form
    #[arg(short, long, value_enum)]
    to: Target,
}

/// Arguments for the `clamp` command.
#[derive(Args)]
struct ClampArgs {
    /// Color: #rrggbb[aa] or r,g,b[,a]
    #[arg(allow_hyphen_values = true)]
    color: InputColor,

    /// Minimum value
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    min: f32,

    /// Maximum value
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    max: f32,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Clamp(args) => commands::clamp::run(args, cli.verbose),
    }
}
