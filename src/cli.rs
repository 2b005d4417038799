//! CLI commands implementation.

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use console::style;

use crate::check;
use crate::models::PageVariant;
use crate::site;

#[derive(Parser)]
#[command(name = "warmsite")]
#[command(about = "Static generator for a global warming information page")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page variants and shared assets to the output directory
    Build {
        /// Output directory
        #[arg(short, long, env = "WARMSITE_OUT", default_value = "site")]
        out: PathBuf,
        /// Render a single variant (classic or perspective; default: both)
        #[arg(long)]
        variant: Option<PageVariant>,
    },

    /// Validate the structure of the rendered pages
    Check {
        /// Check a single variant (classic or perspective; default: both)
        #[arg(long)]
        variant: Option<PageVariant>,
    },

    /// List the external source records
    Sources {
        /// Which variant's list (classic or perspective)
        #[arg(long, default_value = "classic")]
        variant: PageVariant,
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { out, variant } => cmd_build(&out, variant),
        Commands::Check { variant } => cmd_check(variant),
        Commands::Sources { variant, json } => cmd_sources(variant, json),
    }
}

fn variants_or_all(arg: Option<PageVariant>) -> Vec<PageVariant> {
    match arg {
        Some(v) => vec![v],
        None => PageVariant::all().to_vec(),
    }
}

fn cmd_build(out: &Path, variant: Option<PageVariant>) -> anyhow::Result<()> {
    let variants = variants_or_all(variant);
    let report = site::build_site(out, &variants)?;

    for path in &report.written {
        println!("  {} {}", style("wrote").green(), path.display());
    }
    println!(
        "{} {} file(s) under {}",
        style("✓").green().bold(),
        report.written.len(),
        out.display()
    );
    Ok(())
}

fn cmd_check(variant: Option<PageVariant>) -> anyhow::Result<()> {
    let variants = variants_or_all(variant);

    let mut total = 0;
    for v in variants {
        let findings = check::check_page(v);
        if findings.is_empty() {
            println!("  {} {}", style("ok").green(), v.as_str());
        }
        for finding in &findings {
            println!("  {} {}", style("fail").red(), finding);
        }
        total += findings.len();
    }

    if total > 0 {
        bail!("{} structural finding(s)", total);
    }
    println!("{} all pages structurally sound", style("✓").green().bold());
    Ok(())
}

fn cmd_sources(variant: PageVariant, json: bool) -> anyhow::Result<()> {
    let sources = variant.sources();

    if json {
        println!("{}", serde_json::to_string_pretty(&sources)?);
        return Ok(());
    }

    for source in sources {
        println!(
            "{} {}  {}\n    {}",
            source.icon,
            style(source.title).bold(),
            style(source.url).dim(),
            source.description
        );
    }
    Ok(())
}
