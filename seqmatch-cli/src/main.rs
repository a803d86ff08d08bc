//! `seqmatch` command-line interface.
//!
//! Compares two strings (LCS, LCCS, similarity) and exposes the text helpers
//! of the library. Limits come from `SEQMATCH_*` environment variables and
//! can be overridden per invocation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use seqmatch::{DigestAlgorithm, MatcherConfig, SequenceMatcher};
use serde_json::json;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "seqmatch", version, about = "Longest common subsequence and string similarity", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum number of characters accepted per input
    #[arg(long, global = true)]
    max_input_len: Option<usize>,

    /// Maximum number of table cells for LCS/LCCS
    #[arg(long, global = true)]
    max_table_cells: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// First string
    left: String,
    /// Second string
    right: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Longest common subsequence
    Lcs(PairArgs),
    /// Longest contiguous common substring
    Lccs(PairArgs),
    /// LCS length over the longer input's length
    Similarity(PairArgs),
    /// All of the above in one report
    Compare(PairArgs),
    /// Hex digest of a string
    Digest {
        /// Text to hash
        text: String,
        /// sha256 or sha512
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },
    /// Remove URLs from a string
    StripUrls {
        /// Text to clean
        text: String,
    },
    /// Random alphanumeric string
    Random {
        /// Number of characters
        len: usize,
    },
}

fn load_config(cli: &Cli) -> Result<MatcherConfig> {
    let config = MatcherConfig::from_env().context("Failed to load configuration")?;
    apply_overrides(cli, config)
}

/// Applies command-line limits on top of `config`, then validates the result.
fn apply_overrides(cli: &Cli, mut config: MatcherConfig) -> Result<MatcherConfig> {
    if let Some(len) = cli.max_input_len {
        config.max_input_len = len;
    }
    if let Some(cells) = cli.max_table_cells {
        config.max_table_cells = cells;
    }
    config.verbose |= cli.verbose;

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run(cli: &Cli, config: MatcherConfig) -> Result<String> {
    let matcher = SequenceMatcher::new(config);
    let json = cli.format == OutputFormat::Json;

    let output = match &cli.command {
        Commands::Lcs(pair) => {
            let found = matcher.lcs_str(&pair.left, &pair.right)?;
            let len = found.chars().count();
            if json {
                json!({ "lcs": found, "length": len }).to_string()
            } else {
                format!("{found}\n(length {len})")
            }
        }
        Commands::Lccs(pair) => {
            let found = matcher.lccs_str(&pair.left, &pair.right)?;
            let len = found.chars().count();
            if json {
                json!({ "lccs": found, "length": len }).to_string()
            } else {
                format!("{found}\n(length {len})")
            }
        }
        Commands::Similarity(pair) => {
            let ratio = matcher.similarity_str(&pair.left, &pair.right)?;
            if json {
                json!({ "similarity": ratio }).to_string()
            } else {
                format!("{ratio:.4}")
            }
        }
        Commands::Compare(pair) => {
            let report = matcher.compare_str(&pair.left, &pair.right)?;
            if json {
                serde_json::to_string(&report)?
            } else {
                format!(
                    "left length:  {}\nright length: {}\nlcs length:   {}\nlccs length:  {}\nsimilarity:   {:.4}",
                    report.left_len, report.right_len, report.lcs_len, report.lccs_len, report.ratio
                )
            }
        }
        Commands::Digest { text, algorithm } => {
            let algorithm: DigestAlgorithm = algorithm.parse()?;
            let digest = seqmatch::digest_hex(text, algorithm);
            if json {
                json!({ "algorithm": algorithm.to_string(), "digest": digest }).to_string()
            } else {
                digest
            }
        }
        Commands::StripUrls { text } => {
            let cleaned = seqmatch::remove_urls(text);
            if json {
                json!({ "text": cleaned }).to_string()
            } else {
                cleaned
            }
        }
        Commands::Random { len } => {
            let value = seqmatch::random_alphanumeric(*len);
            if json {
                json!({ "value": value }).to_string()
            } else {
                value
            }
        }
    };

    debug!(command = ?cli.command, "Command finished");
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    seqmatch::init_logging(config.verbose).context("Failed to initialize logging")?;
    info!(
        version = seqmatch::VERSION,
        max_input_len = config.max_input_len,
        max_table_cells = config.max_table_cells,
        "seqmatch starting"
    );

    let output = run(&cli, config)?;
    println!("{output}");
    Ok(())
}
