//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, PruneArgs};
use deadwood::adapters::log_file::DEFAULT_LOG_FILE;
use deadwood::output::OutputMode;

/// deadwood - Remove unused measures and columns from TMDL models
#[derive(Parser, Debug)]
#[command(
    name = "deadwood",
    version,
    about = "Remove unused measures and columns from TMDL semantic models",
    long_about = "Prune a semantic model using a usage report.\n\n\
                  The report flags measures and columns as unused.\n\
                  Flagged blocks are cut from the table documents; everything else stays byte-identical."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./deadwood.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove flagged measures and columns from table documents
    Prune {
        /// Usage report (.csv or spreadsheet workbook)
        #[arg(short, long)]
        report: PathBuf,

        /// Directory holding one .tmdl document per table
        #[arg(short, long)]
        tables: PathBuf,

        /// Where to write the removal log
        #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,

        /// Show what would be removed without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Only remove a block when its kind matches the flagged object's kind
        #[arg(long)]
        kind_aware: bool,

        /// Additional table to protect from changes (repeatable)
        #[arg(long = "protect")]
        protect: Vec<String>,

        /// Additional table name prefix to protect (repeatable)
        #[arg(long = "protect-prefix")]
        protect_prefix: Vec<String>,
    },

    /// Show the column mapping and the objects a report flags for removal
    Plan {
        /// Usage report (.csv or spreadsheet workbook)
        #[arg(short, long)]
        report: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Prune {
            report,
            tables,
            log,
            dry_run,
            kind_aware,
            protect,
            protect_prefix,
        }) => commands::prune(
            &PruneArgs {
                report,
                tables,
                log,
                dry_run,
                kind_aware,
                protect,
                protect_prefix,
            },
            cli.config.as_deref(),
            output_mode,
        ),
        Some(Command::Plan { report }) => commands::plan(&report, cli.config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("deadwood v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("deadwood v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'deadwood --help' for usage");
                println!("Run 'deadwood plan --report <FILE>' to preview a report");
            }
            Ok(())
        },
    }
}
