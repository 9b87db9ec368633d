//! Scan command implementation.
//!
//! Reads a source file (or stdin), runs the scanner over it and prints the
//! token list. Diagnostics go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use snipcheck_lex::{scan, Token};
use tracing::debug;

use crate::commands::common::{read_source, report_diagnostics, OutputFormat};
use crate::commands::traits::Command;
use crate::config::DEFAULT_MAX_SOURCE_BYTES;
use crate::error::{Result, SnipError};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Source file; `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// Token output format.
    pub format: OutputFormat,
    /// Exit with an error when any diagnostic is reported.
    pub deny_diagnostics: bool,
    /// Largest accepted input.
    pub max_source_bytes: u64,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::Text,
            deny_diagnostics: false,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Execute the command, printing tokens to stdout.
    pub fn run(&self) -> Result<()> {
        let source = read_source(self.args.input.as_deref(), self.args.max_source_bytes)?;
        let output = scan(&source);
        debug!(
            tokens = output.tokens.len(),
            diagnostics = output.diagnostics.len(),
            "scanned source"
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_tokens(&mut out, &output.tokens)?;
        out.flush()?;

        report_diagnostics(&source, &output.diagnostics);

        if self.args.deny_diagnostics && output.has_errors() {
            return Err(SnipError::Diagnostics(output.diagnostics.len()));
        }
        Ok(())
    }

    /// Write `tokens` to `out` in the configured format.
    pub fn write_tokens<W: Write>(&self, out: &mut W, tokens: &[Token]) -> Result<()> {
        match self.args.format {
            OutputFormat::Text => {
                for token in tokens {
                    writeln!(out, "{}", token)?;
                }
            },
            OutputFormat::Debug => writeln!(out, "{:#?}", tokens)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, tokens)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "scan"
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs) -> Result<()> {
    debug!(command = ScanCommand::name(), ?args, "running command");
    ScanCommand::new(args).execute()
}
