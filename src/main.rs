use clap::{Parser, ValueEnum};
use egolution::config::ConfigManager;
use egolution::engines::generation::{ConsoleProgressCallback, HillClimber, SilentProgressCallback};
use egolution::Variant;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "egolution", version)]
#[command(about = "Hill-climb random genomes over toy text and RNA fitness landscapes")]
struct Args {
    /// Fitness landscape to explore
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Number of iterations to run
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Initial genome length
    #[arg(short, long)]
    length: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Suppress progress markers
    #[arg(short, long)]
    quiet: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut manager = ConfigManager::new();
    match &args.config {
        Some(path) => manager.load_from_file(path)?,
        None => manager.load_from_env()?,
    }
    manager.update(|c| {
        if let Some(variant) = args.variant {
            c.search.variant = variant;
        }
        if args.iterations.is_some() {
            c.search.iterations = args.iterations;
        }
        if args.length.is_some() {
            c.search.initial_length = args.length;
        }
        if args.seed.is_some() {
            c.search.seed = args.seed;
        }
        c.search.quiet |= args.quiet;
    })?;

    let config = manager.get();
    let quiet = config.search.quiet;
    let interval = config.search.progress_interval;

    let mut climber = HillClimber::new(config)?;
    let report = if quiet {
        climber.run(SilentProgressCallback)?
    } else {
        climber.run(ConsoleProgressCallback::stderr(interval))?
    };

    match args.format {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
