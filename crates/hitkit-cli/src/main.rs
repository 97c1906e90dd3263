//! hitkit CLI - batch ray/primitive intersection checks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod batch;
mod error;
mod settings;

use batch::{Batch, CheckRow};
use hitkit_hof::Repeater;
use settings::Settings;

#[derive(Parser)]
#[command(name = "hitkit")]
#[command(about = "Boolean ray-primitive intersection checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every ray in a batch file against every primitive
    Check {
        /// Batch JSON file with `primitives` and `rays`
        batch: PathBuf,
        /// Settings TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print TEXT repeated TIMES times, joined by SEPARATOR
    Repeat {
        text: String,
        separator: String,
        #[arg(allow_negative_numbers = true)]
        times: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            batch,
            config,
            json,
        } => {
            run_check(&batch, config.as_deref(), json)?;
        }
        Commands::Repeat {
            text,
            separator,
            times,
        } => {
            println!("{}", Repeater::new(text, separator).repeat(times));
        }
    }

    Ok(())
}

fn run_check(path: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let settings = match config {
        Some(p) => Settings::load(p)
            .with_context(|| format!("loading settings from {}", p.display()))?,
        None => Settings::default(),
    };

    let batch =
        Batch::load(path).with_context(|| format!("loading batch from {}", path.display()))?;
    if settings.check.validate {
        batch.validate()?;
    }

    let rows = batch.check(&settings.tolerance);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_table(&rows));
    }

    Ok(())
}

fn format_table(rows: &[CheckRow]) -> String {
    let mut out = format!("{:>5}  {:>9}  {:<8}  {}\n", "ray", "primitive", "kind", "hit");
    for row in rows {
        out.push_str(&format!(
            "{:>5}  {:>9}  {:<8}  {}\n",
            row.ray,
            row.primitive,
            row.kind,
            if row.hit { "yes" } else { "no" }
        ));
    }
    out
}
