//! Snipcheck CLI - Scan code snippets and check their language tag.
//!
//! This is the main entry point for the snipcheck CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler.

mod commands;
mod config;
mod error;
mod language;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    config::{run_config, ConfigArgs},
    scan::{run_scan, ScanArgs},
};
use config::Config;
use error::{Result, SnipError};

/// Snipcheck - scan code snippets and check their language tag
///
/// `scan` prints the tokens of a source file. `check` validates a
/// language tag for a snippet and prints its label.
#[derive(Parser, Debug)]
#[command(name = "snipcheck")]
#[command(author = "Snipcheck Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan code snippets and check their language tag", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SNIPCHECK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SNIPCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SNIPCHECK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the snipcheck CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file and print its tokens
    ///
    /// Reads INPUT (or stdin when INPUT is absent or `-`) and prints one
    /// line per token. Diagnostics are printed to stderr.
    Scan(ScanCommand),

    /// Check a snippet's language tag
    ///
    /// Prints the label for LANGUAGE (typescript, java or rust).
    /// TypeScript snippets are scanned as well.
    Check(CheckCommand),

    /// Show the effective configuration
    ///
    /// Prints the configuration in effect as TOML, or writes it to a file
    /// with `--write`.
    Config(ConfigCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Source file to scan (default: stdin)
    input: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if the scanner reports any diagnostic
    #[arg(long)]
    deny_diagnostics: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long)]
    max_bytes: Option<u64>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Language tag: typescript, java or rust
    language: String,

    /// Snippet text, or `-` to read stdin
    #[arg(conflicts_with = "file")]
    snippet: Option<String>,

    /// Read the snippet from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, requires = "write")]
    force: bool,
}

/// Main entry point for the snipcheck CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbose flag. Logs go to stderr so
/// stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

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
        .map_err(|e| SnipError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan(args) => execute_scan(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Config(args) => execute_config(args, config),
    }
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, config: Config) -> Result<()> {
    let scan_args = ScanArgs {
        input: args.input,
        format: args.format.unwrap_or(config.scan.format),
        deny_diagnostics: args.deny_diagnostics || config.scan.deny_diagnostics,
        max_source_bytes: args.max_bytes.unwrap_or(config.scan.max_source_bytes),
    };
    run_scan(scan_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        language: args.language,
        snippet: args.snippet,
        file: args.file,
        max_source_bytes: config.scan.max_source_bytes,
    };
    run_check(check_args)
}

/// Execute the config command.
fn execute_config(args: ConfigCommand, config: Config) -> Result<()> {
    let config_args = ConfigArgs {
        config,
        write: args.write,
        force: args.force,
    };
    run_config(config_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["snipcheck", "scan"]);
        if let Commands::Scan(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.format.is_none());
            assert!(!args.deny_diagnostics);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_with_input() {
        let cli = Cli::parse_from(["snipcheck", "scan", "program.lox"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("program.lox")));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_with_format() {
        let cli = Cli::parse_from(["snipcheck", "scan", "--format", "json"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_rejects_unknown_format() {
        let result = Cli::try_parse_from(["snipcheck", "scan", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_scan_with_limits() {
        let cli = Cli::parse_from([
            "snipcheck",
            "scan",
            "--deny-diagnostics",
            "--max-bytes",
            "512",
        ]);
        if let Commands::Scan(args) = cli.command {
            assert!(args.deny_diagnostics);
            assert_eq!(args.max_bytes, Some(512));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_check_inline() {
        let cli = Cli::parse_from(["snipcheck", "check", "rust", "fn main() {}"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.language, "rust");
            assert_eq!(args.snippet, Some("fn main() {}".to_string()));
            assert!(args.file.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_file() {
        let cli = Cli::parse_from(["snipcheck", "check", "java", "--file", "A.java"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("A.java")));
            assert!(args.snippet.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_inline_conflicts_with_file() {
        let result =
            Cli::try_parse_from(["snipcheck", "check", "java", "x", "--file", "A.java"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check_requires_language() {
        assert!(Cli::try_parse_from(["snipcheck", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_config_write() {
        let cli = Cli::parse_from(["snipcheck", "config", "--write", "snipcheck.toml", "--force"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.write, Some(PathBuf::from("snipcheck.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parse_config_force_requires_write() {
        assert!(Cli::try_parse_from(["snipcheck", "config", "--force"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["snipcheck", "--verbose", "scan"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["snipcheck", "scan", "--config", "/path/to/snipcheck.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/snipcheck.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["snipcheck", "--no-color", "scan"]);
        assert!(cli.no_color);
    }
}
