use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use packgen::{CsvSink, DatasetGenerator, DestinationCatalog, PackGenConfig, RecordSink};
use tracing::info;

/// Synthetic travel packing dataset generator
#[derive(Parser, Debug)]
#[command(name = "packgen", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate packing records and write them as CSV
    Generate {
        /// Number of records
        #[arg(short = 'n', long)]
        records: Option<usize>,

        /// Destination catalog JSON file
        #[arg(short, long)]
        destinations: Option<String>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<packgen::PackGenError>() {
            Some(app_err) => eprintln!("Error: {}", app_err.user_message()),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = PackGenConfig::load_from_path(cli.config.clone())?;
    packgen::logging::init(&config.logging, cli.verbose)?;

    if cli.verbose {
        let source = cli
            .config
            .clone()
            .or_else(PackGenConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        info!(config = %source, log_level = %config.logging.level, "configuration loaded");
    }

    let Some(Command::Generate {
        records,
        destinations,
        output,
        seed,
    }) = cli.command
    else {
        // Default action mirrors `generate` with configured values
        return generate(&config);
    };

    if let Some(records) = records {
        config.generation.records = records;
    }
    if let Some(destinations) = destinations {
        config.generation.destinations_file = destinations;
    }
    if let Some(output) = output {
        config.output.path = output;
    }
    if seed.is_some() {
        config.generation.seed = seed;
    }

    generate(&config)
}

fn generate(config: &PackGenConfig) -> Result<()> {
    let catalog = DestinationCatalog::load(&config.generation.destinations_file)?;

    let today = Local::now().date_naive();
    let mut generator = DatasetGenerator::new(&catalog, config.generation.clone(), today);
    let records = generator.generate(config.generation.records)?;

    let mut sink = CsvSink::create(&config.output.path)?;
    sink.write_records(&records)
        .with_context(|| format!("Failed to write {}", config.output.path))?;

    println!("Generated {} travel packing records.", records.len());
    Ok(())
}
