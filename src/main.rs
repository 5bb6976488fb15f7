//! merkle CLI - Command line interface for merkle_levels
//!
//! Builds a Merkle tree from blocks given as arguments, read from a file
//! (one block per line) or from stdin, and prints what was asked for as JSON.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use merkle_levels::input::{read_blocks, read_blocks_from_file};
use merkle_levels::{Config, DataBlock, Digest, Error, MerkleTree};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "merkle")]
#[command(about = "Build a binary Merkle tree and inspect its levels")]
#[command(version)]
struct Cli {
    /// Output format (json or text) [default: json]
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to a config file (defaults to ~/.config/merkle_levels/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter passed to env_logger, e.g. "debug"
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Where the data blocks come from
#[derive(Args)]
struct InputArgs {
    /// Data blocks, in order
    blocks: Vec<String>,

    /// Read blocks from a file, one per line
    #[arg(long, conflicts_with_all = ["blocks", "stdin"])]
    file: Option<PathBuf>,

    /// Read blocks from stdin, one per line
    #[arg(long, conflicts_with = "blocks")]
    stdin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every level of the tree
    Build {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the root digest
    Root {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the number of levels
    Height {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the digests of one level (0 = leaves)
    Level {
        /// The level index
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Check that the blocks hash to an expected root
    Verify {
        /// Expected root digest, hex encoded
        #[arg(short, long)]
        root: String,
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    // Until the config is read, errors use the flag's format or JSON.
    let early_format = cli.format.unwrap_or(OutputFormat::Json);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&early_format, &e),
    };
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level().to_string());
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(log_level));

    let format = match (cli.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => match OutputFormat::from_str(name, true) {
            Ok(format) => format,
            Err(_) => fail(
                &early_format,
                &Error::Config(format!("Unknown output format: {}", name)),
            ),
        },
        (None, None) => OutputFormat::Json,
    };
    debug!("output format {:?}", format);

    match run(cli.command) {
        Ok((value, success)) => {
            output(&format, &value);
            if !success {
                std::process::exit(1);
            }
        }
        Err(e) => fail(&format, &e),
    }
}

/// Print `err` as a JSON error object and exit with status 1
fn fail(format: &OutputFormat, err: &Error) -> ! {
    output(
        format,
        &serde_json::json!({
            "status": "error",
            "message": err.to_string()
        }),
    );
    std::process::exit(1);
}

/// Run one command, returning its output and whether it succeeded
fn run(command: Commands) -> merkle_levels::Result<(serde_json::Value, bool)> {
    match command {
        Commands::Build { input } => {
            let tree = build_tree(input)?;
            Ok((serde_json::to_value(tree.export())?, true))
        }

        Commands::Root { input } => {
            let tree = build_tree(input)?;
            Ok((serde_json::json!({ "root": tree.root().to_hex() }), true))
        }

        Commands::Height { input } => {
            let tree = build_tree(input)?;
            Ok((serde_json::json!({ "height": tree.height() }), true))
        }

        Commands::Level { index, input } => {
            let tree = build_tree(input)?;
            let level = usize::try_from(index)
                .map_err(|_| Error::LevelNotFound(index))
                .and_then(|i| tree.level(i))?;
            let digests: Vec<_> = level.iter().map(Digest::to_hex).collect();
            Ok((
                serde_json::json!({
                    "index": index,
                    "count": digests.len(),
                    "digests": digests
                }),
                true,
            ))
        }

        Commands::Verify { root, input } => {
            let expected = Digest::from_hex(&root)?;
            let tree = build_tree(input)?;
            let matched = tree.root() == expected;
            Ok((
                serde_json::json!({
                    "status": if matched { "ok" } else { "mismatch" },
                    "expected": expected.to_hex(),
                    "root": tree.root().to_hex()
                }),
                matched,
            ))
        }
    }
}

fn build_tree(input: InputArgs) -> merkle_levels::Result<MerkleTree> {
    let blocks: Vec<DataBlock> = if let Some(path) = input.file {
        read_blocks_from_file(&path)?
    } else if input.stdin {
        read_blocks(std::io::stdin().lock())?
    } else {
        input.blocks.into_iter().map(DataBlock::from).collect()
    };
    info!("building tree from {} blocks", blocks.len());
    MerkleTree::create(blocks)
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            );
        }
    }
}
