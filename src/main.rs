//! client-report CLI: query a client CSV and export the PDF report.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use client_report::{MalformedRowPolicy, PipelineBuilder, PipelineError, Record, RecordStore, ReportConfig};

#[derive(Parser)]
#[command(name = "client-report")]
#[command(version)]
#[command(about = "Query client records and export them as a PDF report", long_about = None)]
struct Cli {
    /// CSV file with a header row and `id,name,email,city` rows
    #[arg(value_name = "CSV")]
    input: PathBuf,

    /// Report configuration (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip rows whose id is not a number instead of failing
    #[arg(long, global = true)]
    skip_malformed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record
    List,

    /// Print the records of one city (case-insensitive)
    City {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the records whose name contains TEXT (case-insensitive)
    Search {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Print the number of records
    Count,

    /// Print the number of records per city
    Stats,

    /// Write the PDF report
    Export {
        /// Output PDF file
        #[arg(value_name = "OUT")]
        output: PathBuf,

        /// Only include records from this city
        #[arg(long)]
        city: Option<String>,

        /// Only include records whose name contains this text
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("client_report=info"))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    if cli.skip_malformed {
        config.source.malformed_rows = MalformedRowPolicy::Skip;
    }

    let pipeline = PipelineBuilder::new().with_config(config).build()?;
    let store = pipeline.record_store(&cli.input);

    match cli.command {
        Commands::List => print_records(&store.try_load_all()?),
        Commands::City { name } => {
            ensure_readable(&store)?;
            print_records(&store.find_by_city(&name)?)
        }
        Commands::Search { text } => {
            ensure_readable(&store)?;
            print_records(&store.find_by_name_contains(&text)?)
        }
        Commands::Count => {
            ensure_readable(&store)?;
            println!("{}", store.count()?);
        }
        Commands::Stats => {
            ensure_readable(&store)?;
            for (city, count) in &store.count_by_city()? {
                println!("{:<24} {}", display_city(city), count);
            }
        }
        Commands::Export { output, city, name } => {
            let mut records = match &city {
                Some(city) => {
                    ensure_readable(&store)?;
                    store.find_by_city(city)?
                }
                None => store.try_load_all()?,
            };
            if let Some(name) = &name {
                let needle = name.to_lowercase();
                records.retain(|r| r.name().to_lowercase().contains(&needle));
            }
            let summary = pipeline.render_to_file(&records, &output)?;
            println!(
                "Wrote {} ({} records, {} page(s), {} bytes)",
                output.display(),
                records.len(),
                summary.pages,
                summary.bytes
            );
        }
    }

    Ok(())
}

/// The store's queries treat an unreadable file as empty; on the command line that
/// should be an error instead.
fn ensure_readable(store: &RecordStore) -> Result<(), PipelineError> {
    store.try_load_all()?;
    Ok(())
}

fn print_records(records: &[Record]) {
    for r in records {
        println!("{:>6}  {:<28} {:<32} {}", r.id, r.name(), r.email(), r.city());
    }
}

fn display_city(city: &str) -> &str {
    if city.is_empty() { "(sin ciudad)" } else { city }
}
