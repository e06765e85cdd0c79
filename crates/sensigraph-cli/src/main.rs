//! Sensigraph CLI
//!
//! - `ingest`: association tables → edge documents (JSON Lines)
//! - `check`: header validation only
//! - `curie`: normalize raw identifiers
//! - `schema`: expected columns and vocabulary codes

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use sensigraph_ingest_csv::{
    ingest_path, EdgeStream, IngestConfig, JsonLinesWriter, RecordBuilder, RunStats,
    StaticNameTable, EXPECTED_COLUMNS,
};
use sensigraph_model::{normalize_curie, DiseaseContext, Vocabulary};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

mod logging;

#[derive(Parser)]
#[command(name = "sensigraph")]
#[command(
    author,
    version,
    about = "Sensigraph: gene-drug sensitivity tables to knowledge-graph edges"
)]
struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize association tables into edge documents (JSON Lines).
    ///
    /// Every input file is processed with its own duplicate table; record IDs
    /// are unique per file.
    Ingest(IngestArgs),

    /// Validate table headers without emitting anything.
    Check {
        /// Input tables
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Ingest config (JSON); only the delimiter is used
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Normalize raw identifiers and print the result as JSON.
    Curie {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print the expected column layout and the controlled vocabularies.
    Schema,
}

#[derive(Args)]
struct IngestArgs {
    /// Input tables
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output JSON Lines file (default: stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Ingest config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Record-ID namespace (overrides config)
    #[arg(long)]
    namespace: Option<String>,
    /// Nodes table (`id,name[,category]`) used to fill empty identifier cells
    #[arg(long)]
    nodes: Option<PathBuf>,
    /// Strip screening suffixes from drug names
    #[arg(long)]
    clean_names: bool,
    /// Drop unknown disease contexts instead of aborting
    #[arg(long)]
    lenient_disease_context: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Ingest(args) => cmd_ingest(args),
        Commands::Check { inputs, config } => cmd_check(&inputs, config.as_ref()),
        Commands::Curie { ids } => cmd_curie(&ids),
        Commands::Schema => cmd_schema(),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<IngestConfig> {
    match path {
        Some(path) => IngestConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(IngestConfig::default()),
    }
}

fn cmd_ingest(args: IngestArgs) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(namespace) = args.namespace {
        config.namespace = namespace;
    }
    if args.clean_names {
        config.clean_object_names = true;
    }
    if args.lenient_disease_context {
        config.require_disease_context = false;
    }

    let mut builder = RecordBuilder::from_config(config);
    if let Some(nodes) = &args.nodes {
        let table = StaticNameTable::from_path(nodes)
            .with_context(|| format!("loading nodes table {}", nodes.display()))?;
        eprintln!("{} {} names from {}", "loaded".green().bold(), table.len(), nodes.display());
        builder = builder.with_resolver(Arc::new(table));
    }

    let sink: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = JsonLinesWriter::new(BufWriter::new(sink));

    let mut total = RunStats::default();
    for input in &args.inputs {
        eprintln!("{} {}", "Ingesting".green().bold(), input.display());
        let stats = ingest_path(input, &builder, &mut writer)
            .with_context(|| format!("ingesting {}", input.display()))?;
        print_stats(&stats);
        total.rows_read += stats.rows_read;
        total.emitted += stats.emitted;
        total.skipped += stats.skipped;
        total.duplicates += stats.duplicates;
    }
    writer.flush()?;

    if args.inputs.len() > 1 {
        eprint!("{} ", "total".bold());
        print_stats(&total);
    }
    if let Some(out) = &args.out {
        eprintln!("{} {}", "wrote".green().bold(), out.display().to_string().bold());
    }
    Ok(())
}

fn print_stats(stats: &RunStats) {
    let skipped = if stats.skipped > 0 {
        stats.skipped.to_string().yellow()
    } else {
        stats.skipped.to_string().normal()
    };
    eprintln!(
        "  {} rows={} emitted={} skipped={} duplicates={}",
        "→".cyan(),
        stats.rows_read,
        stats.emitted,
        skipped,
        stats.duplicates
    );
}

fn cmd_check(inputs: &[PathBuf], config: Option<&PathBuf>) -> Result<()> {
    let builder = RecordBuilder::from_config(load_config(config)?);
    let mut failures = 0usize;
    for input in inputs {
        let file = fs::File::open(input).with_context(|| format!("opening {}", input.display()))?;
        match EdgeStream::new(io::BufReader::new(file), &builder, input.display().to_string()) {
            Ok(_) => eprintln!("{} {}", "ok".green().bold(), input.display()),
            Err(err) => {
                failures += 1;
                eprintln!("{} {}\n{}", "fail".red().bold(), input.display(), err);
            }
        }
    }
    if failures > 0 {
        return Err(anyhow!("{failures} of {} tables failed header validation", inputs.len()));
    }
    Ok(())
}

fn cmd_curie(ids: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for raw in ids {
        match normalize_curie(raw) {
            Ok(id) => writeln!(out, "{}", serde_json::to_string(&id)?)?,
            Err(err) => eprintln!("{} {}", "unparseable".yellow().bold(), err),
        }
    }
    Ok(())
}

fn cmd_schema() -> Result<()> {
    let config = IngestConfig::default();
    let builder = RecordBuilder::from_config(config);

    println!("{}", "Columns".bold());
    for (position, name) in EXPECTED_COLUMNS.iter().enumerate() {
        println!("  {position:>2}  {name}");
    }
    for vocabulary in Vocabulary::ALL {
        println!("{}", vocabulary.as_str().bold());
        println!("  {}", builder.tables().codes(vocabulary).join(", "));
    }
    println!("{}", "disease contexts".bold());
    let codes: Vec<&str> = DiseaseContext::all().iter().map(|d| d.code).collect();
    println!("  {}", codes.join(", "));
    Ok(())
}
