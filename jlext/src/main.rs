//! jlext - command-line driver for the jlex Java tokenizer.
//!
//! Parses arguments with clap, sets up logging, loads `jlext.toml` and
//! dispatches to the selected subcommand.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokenize, CheckArgs, TokenizeArgs};
use config::Config;
use error::{JlextError, Result};

/// jlext - Tokenize Java source files
///
/// Every character of a file ends up in exactly one token. Malformed input
/// becomes UNKNOWN tokens with diagnostics instead of stopping the scan.
#[derive(Parser, Debug)]
#[command(name = "jlext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Java source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jlext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of Java source files
    ///
    /// Tokens are printed as `KIND line:col 'lexeme'` lines or as JSON.
    /// Diagnostics for UNKNOWN tokens are rendered on stderr.
    Tokenize(TokenizeCommand),

    /// Report lexical diagnostics without printing tokens
    ///
    /// Exits with a failure status if any diagnostic was reported.
    Check(CheckCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Java source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave whitespace and comment tokens out of the listing
    #[arg(long)]
    skip_trivia: bool,

    /// Number of parallel jobs (default: from config, else CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Write the listing to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail if any file contains an UNKNOWN token
    #[arg(long)]
    deny_unknown: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Java source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config, else CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let verbose = cli.verbose || config.verbose;
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token listings on stdout stay parseable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JlextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => run_tokenize(tokenize_args(args, verbose, &config)),
        Commands::Check(args) => run_check(check_args(args, verbose, &config)),
    }
}

/// Merge tokenize flags with configuration; flags win.
fn tokenize_args(args: TokenizeCommand, verbose: bool, config: &Config) -> TokenizeArgs {
    TokenizeArgs {
        files: args.files,
        verbose,
        format: args.format.unwrap_or(config.tokenize.format),
        skip_trivia: args.skip_trivia || config.tokenize.skip_trivia,
        jobs: args.jobs.unwrap_or(config.tokenize.jobs),
        output: args.output,
        deny_unknown: args.deny_unknown,
    }
}

fn check_args(args: CheckCommand, verbose: bool, config: &Config) -> CheckArgs {
    CheckArgs {
        files: args.files,
        verbose,
        jobs: args.jobs.unwrap_or(config.tokenize.jobs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizeConfig;

    fn json_config() -> Config {
        Config {
            verbose: false,
            tokenize: TokenizeConfig {
                format: OutputFormat::Json,
                skip_trivia: true,
                jobs: 3,
            },
        }
    }

    #[test]
    fn test_cli_parse_tokenize() {
        let cli = Cli::parse_from(["jlext", "tokenize", "A.java"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("A.java")]);
            assert_eq!(args.format, None);
            assert!(!args.skip_trivia);
            assert!(!args.deny_unknown);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_with_options() {
        let cli = Cli::parse_from([
            "jlext",
            "tokenize",
            "A.java",
            "B.java",
            "--format",
            "json",
            "--skip-trivia",
            "--jobs",
            "2",
            "--output",
            "out.json",
            "--deny-unknown",
        ]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.skip_trivia);
            assert_eq!(args.jobs, Some(2));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.deny_unknown);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_tokenize_requires_files() {
        assert!(Cli::try_parse_from(["jlext", "tokenize"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_jobs() {
        assert!(Cli::try_parse_from(["jlext", "check", "A.java", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jlext", "tokenize", "A.java", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["jlext", "check", "A.java", "-j", "4"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("A.java")]);
            assert_eq!(args.jobs, Some(4));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "jlext",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/jlext.toml",
            "check",
            "A.java",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/jlext.toml")));
    }

    #[test]
    fn test_tokenize_args_use_config_defaults() {
        let cli = Cli::parse_from(["jlext", "tokenize", "A.java"]);
        let Commands::Tokenize(args) = cli.command else {
            panic!("Expected Tokenize command");
        };
        let merged = tokenize_args(args, false, &json_config());
        assert_eq!(merged.format, OutputFormat::Json);
        assert!(merged.skip_trivia);
        assert_eq!(merged.jobs, 3);
    }

    #[test]
    fn test_tokenize_flags_override_config() {
        let cli = Cli::parse_from(["jlext", "tokenize", "A.java", "-F", "text", "-j", "1"]);
        let Commands::Tokenize(args) = cli.command else {
            panic!("Expected Tokenize command");
        };
        let merged = tokenize_args(args, true, &json_config());
        assert_eq!(merged.format, OutputFormat::Text);
        assert_eq!(merged.jobs, 1);
        assert!(merged.verbose);
    }

    #[test]
    fn test_check_args_use_config_jobs() {
        let cli = Cli::parse_from(["jlext", "check", "A.java"]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(check_args(args, false, &json_config()).jobs, 3);
    }
}
