mod config;
mod export;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use config::Config;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use ticky_log::{ErrorReport, UserReport};

#[derive(Parser)]
#[command(name = "ticky")]
#[command(about = "Error and per-user reports for ticky syslogs", version, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a log and write the error and user CSV reports (default)
    Report(ReportArgs),
    /// Classify a log and emit the matched events as JSON IR
    Parse {
        /// Path to the log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Print both reports as JSON without writing files
    Summary {
        /// Path to the log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Config file (defaults to ./ticky.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file to analyze (overrides config)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the CSV reports (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name of the error report (overrides config)
    #[arg(long)]
    errors_file: Option<String>,

    /// File name of the user report (overrides config)
    #[arg(long)]
    users_file: Option<String>,
}

impl ReportArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(errors_file) = self.errors_file {
            config.errors_file = errors_file;
        }
        if let Some(users_file) = self.users_file {
            config.users_file = users_file;
        }
        config
    }
}

#[derive(Serialize)]
struct Summary {
    schema_version: &'static str,
    errors: ErrorReport,
    users: UserReport,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run_report(args: ReportArgs) -> anyhow::Result<()> {
    let base = Config::resolve(args.config.as_deref())?;
    let config = args.apply(base);
    log::debug!("Resolved config: {:?}", config);

    let aggregator = export::analyze_file(&config.input)?;
    export::write_reports(&aggregator, &config)?;
    println!(
        "Reports generated in '{}/' folder.",
        config.output_dir.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Report(ReportArgs::default())) {
        Commands::Report(args) => run_report(args)?,
        Commands::Parse { path } => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open log {}", path.display()))?;
            let events = ticky_log::events(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        Commands::Summary { path } => {
            let aggregator = export::analyze_file(&path)?;
            let summary = Summary {
                schema_version: ticky_log::SCHEMA_VERSION,
                errors: aggregator.error_report(),
                users: aggregator.user_report(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
