use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use textrank_summarizer::{utils::text::load_corpus, Config, KeywordExtractor, Keywords, Result, Summarizer};

#[derive(Parser, Debug)]
#[command(version, about = "Extractive summaries and keywords from plain text", long_about = None)]
struct Cli {
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the most important sentences of a text
    Summarise {
        /// Corpus file
        file: PathBuf,
        /// Fraction of sentences to drop
        #[arg(short, long)]
        ratio: Option<f64>,
        /// Keep corpus order (true) or order by score (false)
        #[arg(long)]
        preserve_order: Option<bool>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the heaviest words of a text
    Keywords {
        /// Corpus file
        file: PathBuf,
        /// Number of keywords
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Print every word with its weight
        #[arg(long)]
        raw: bool,
        /// Print the keywords as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match cli.verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Summarise { file, ratio, preserve_order, json } => {
            let corpus = load_corpus(&file)?;
            let ratio = ratio.unwrap_or(config.summary.reduction_ratio);
            let preserve_order = preserve_order.unwrap_or(config.summary.preserve_order);

            let start = Instant::now();
            let summary = Summarizer::from_config(&config).summarise(&corpus, ratio, preserve_order)?;
            info!("summarised {} in {:?} ({} sentences kept)", file.display(), start.elapsed(), summary.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.to_text());
            }
        }
        Command::Keywords { file, count, raw, json } => {
            let corpus = load_corpus(&file)?;
            let count = count.unwrap_or(config.keywords.count);

            let start = Instant::now();
            let keywords: Keywords<f64> = KeywordExtractor::from_config(&config).extract_keywords(&corpus, count, raw)?;
            info!("extracted {} keywords from {} in {:?}", keywords.len(), file.display(), start.elapsed());

            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
                return Ok(());
            }
            match keywords {
                Keywords::Ranked(words) => {
                    for word in words {
                        println!("{word}");
                    }
                }
                Keywords::Raw(weights) => {
                    for (word, weight) in weights {
                        println!("{word}\t{weight:.6}");
                    }
                }
            }
        }
    }
    Ok(())
}
