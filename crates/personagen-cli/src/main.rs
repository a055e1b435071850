use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use personagen_core::{Error as CoreError, FieldName, FieldSelection};
use personagen_generate::output::csv::write_batch_csv_file;
use personagen_generate::output::json::write_batch_json_file;
use personagen_generate::{
    DEFAULT_SEED, find_all, project_batch, render_preview, summarize, synthesize,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown field: {0}")]
    UnknownField(String),
}

#[derive(Parser, Debug)]
#[command(name = "personagen", version, about = "Synthetic profile generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate profiles, print the preview, and optionally save them.
    Generate(GenerateArgs),
    /// Search a saved preview for a keyword.
    Search(SearchArgs),
    /// Summarize a saved preview.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of profiles to generate.
    #[arg(long, default_value_t = 1)]
    count: i64,
    /// Fields to include, comma separated. Defaults to every field.
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
    /// Output format for --out.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Destination path. Omit to preview without saving.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for the random source.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Preview file to search.
    #[arg(long)]
    file: PathBuf,
    /// Keyword to look for (case-insensitive).
    keyword: String,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Preview file to summarize.
    #[arg(long)]
    file: PathBuf,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => run_generate(args),
        Command::Search(args) => run_search(args),
        Command::Stats(args) => run_stats(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let selection = parse_selection(&args.fields)?;
    let batch = synthesize(args.count, args.seed)?;
    let batch = project_batch(&batch, &selection);

    let preview = render_preview(&batch);
    print!("{preview}");

    if let Some(path) = args.out {
        let bytes = match args.format {
            OutputFormat::Json => write_batch_json_file(&path, &batch)?,
            OutputFormat::Csv => write_batch_csv_file(&path, &batch)?,
        };
        info!(
            path = %path.display(),
            bytes,
            profiles = batch.len(),
            "saved profiles"
        );
        println!("Saved {} profiles to {}", batch.len(), path.display());
    }
    Ok(())
}

fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.file)?;
    let mut total = 0_usize;
    for span in find_all(&text, &args.keyword) {
        println!("{}..{}  {}", span.start, span.end, &text[span.start..span.end]);
        total += 1;
    }
    println!("{total} match(es)");
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.file)?;
    let stats = summarize(&text);
    println!(
        "📊 Total: {} | 👨 Males: {} | 👩 Females: {}",
        stats.total_profiles, stats.male_count, stats.female_count
    );
    Ok(())
}

fn parse_selection(raw: &[String]) -> Result<FieldSelection, CliError> {
    if raw.is_empty() {
        return Ok(FieldSelection::all());
    }
    let mut fields = Vec::with_capacity(raw.len());
    for name in raw {
        let field = FieldName::parse(name.trim())
            .ok_or_else(|| CliError::UnknownField(name.clone()))?;
        fields.push(field);
    }
    Ok(FieldSelection::new(fields)?)
}
