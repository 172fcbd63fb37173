//! Docmine CLI - Russian document normalization
//!
//! Command-line interface for cleaning, stop-word removal and lemmatization.

use clap::{Parser, Subcommand};
use docmine::{Cleaner, Config, DocmineError, Result, TextNormalizer};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::{error, info};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "docmine")]
#[command(author = "Docmine Contributors")]
#[command(version)]
#[command(about = "Russian document normalization for text mining", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a document into lemmatized, stop-word-free text
    Normalize {
        /// Input file (use "-" or omit for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Normalize a corpus with one document per line
    Batch {
        /// Input corpus file (one document per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (one normalized document per line)
        #[arg(short, long)]
        output: PathBuf,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run only the cleaning rules and print the result
    Clean {
        /// Input file (use "-" or omit for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also remove words mixing scripts in any order
        #[arg(long)]
        strict: bool,
    },

    /// List the cleaning rules in the order they are applied
    Rules {
        /// Show the strict rule set
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Normalize {
            input,
            output,
            config,
        } => normalize_document(input, output, config),

        Commands::Batch {
            input,
            output,
            config,
        } => normalize_corpus(input, output, config),

        Commands::Clean {
            input,
            config,
            strict,
        } => clean_document(input, config, strict),

        Commands::Rules { strict } => list_rules(strict),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_normalizer(config_path: Option<&Path>) -> Result<TextNormalizer> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_json_file(path)?
        }
        None => Config::default(),
    };
    TextNormalizer::from_config(&config)
}

/// Reads the whole input, from stdin when `input` is absent or "-".
fn read_input(input: Option<&str>) -> Result<String> {
    let mut text = String::new();
    match input {
        None | Some("-") => {
            io::stdin().lock().read_to_string(&mut text)?;
        }
        Some(path) => {
            text = fs::read_to_string(path)
                .map_err(|e| DocmineError::from_io_at(e, Path::new(path)))?;
        }
    }
    Ok(text)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "{}", text)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn normalize_document(
    input: Option<String>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    // Resources are loaded before the document is read
    let normalizer = load_normalizer(config.as_deref())?;
    let normalized = match input.as_deref() {
        None | Some("-") => normalizer.run(io::stdin().lock())?,
        Some(path) => normalizer.run_file(path)?,
    };
    write_output(output.as_deref(), &normalized)
}

fn normalize_corpus(input: PathBuf, output: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let start_time = Instant::now();
    let normalizer = load_normalizer(config.as_deref())?;

    let documents: Vec<String> = {
        let file = File::open(&input)
            .map_err(|e| DocmineError::from_io_at(e, &input))?;
        BufReader::new(file).lines().collect::<io::Result<_>>()?
    };
    info!("Loaded {} documents from {}", documents.len(), input.display());

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) ETA: {eta}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );

    let normalized = normalizer.normalize_batch_with(documents.as_slice(), |_| pb.inc(1));

    pb.finish_and_clear();

    let mut writer = BufWriter::new(File::create(&output)?);
    for line in &normalized {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    println!(
        "✓ Normalized {} documents in {}",
        normalized.len(),
        HumanDuration(start_time.elapsed())
    );
    println!("   Output: {}", output.display());

    Ok(())
}

fn clean_document(input: Option<String>, config: Option<PathBuf>, strict: bool) -> Result<()> {
    let mut normalizer = load_normalizer(config.as_deref())?;
    if strict {
        normalizer = normalizer.with_cleaner(Cleaner::strict());
    }
    let text = read_input(input.as_deref())?;
    println!("{}", normalizer.cleaned(&text));
    Ok(())
}

fn list_rules(strict: bool) -> Result<()> {
    let cleaner = if strict { Cleaner::strict() } else { Cleaner::standard() };
    for (i, rule) in cleaner.rules().iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:<40} -> {:?}",
            i + 1,
            rule.name(),
            rule.pattern(),
            rule.replacement()
        );
    }
    Ok(())
}
