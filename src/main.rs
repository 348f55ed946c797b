//! vpstrat - manifest tool for video poker strategy files
//!
//! Scans a directory for `strategy_*.vpstrat2` files and prints a JSON
//! manifest describing them (pay-table id, display name, game family, file
//! size). The manifest is uploaded alongside the strategy files as the
//! downloadable asset index; this tool only produces it.
//!
//! # Usage
//!
//! ```bash
//! # Print the manifest to stdout
//! vpstrat ../strategies > manifest.json
//!
//! # Or write it directly to a file
//! vpstrat ../strategies -o manifest.json
//! ```

mod manifest;
mod paytable;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON manifest of video poker strategy files
#[derive(Parser)]
#[command(name = "vpstrat")]
#[command(about = "Generate a JSON manifest of video poker strategy files")]
#[command(version)]
struct Cli {
    /// Directory containing strategy_*.vpstrat2 files
    dir: Option<PathBuf>,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The directory is optional at the parser level so a missing argument
    // exits with status 1 and a usage line, not clap's status 2.
    let Some(dir) = cli.dir else {
        eprintln!("Usage: vpstrat <dir> [--output FILE]");
        std::process::exit(1);
    };

    manifest::execute(&dir, cli.output.as_deref())
}
