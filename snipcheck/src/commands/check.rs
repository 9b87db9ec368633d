//! Check command implementation.
//!
//! Validates a language tag, loads the snippet that comes with it, and
//! reports the tag's label. TypeScript snippets are also run through the
//! scanner.

use std::path::PathBuf;

use snipcheck_lex::scan;
use tracing::{debug, trace};

use crate::commands::common::{check_size, read_source, STDIN_MARKER};
use crate::commands::traits::Command;
use crate::config::DEFAULT_MAX_SOURCE_BYTES;
use crate::error::{Result, SnipError};
use crate::language::SupportedLanguage;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Language tag as given on the command line.
    pub language: String,
    /// Inline snippet, or `-` for stdin.
    pub snippet: Option<String>,
    /// File holding the snippet.
    pub file: Option<PathBuf>,
    /// Largest accepted snippet.
    pub max_source_bytes: u64,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            language: String::new(),
            snippet: None,
            file: None,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command, returning the validated language.
    pub fn run(&self) -> Result<SupportedLanguage> {
        let language: SupportedLanguage = self.args.language.parse()?;
        let snippet = self.load_snippet()?;

        if language.has_scanner() {
            let output = scan(&snippet);
            for token in &output.tokens {
                trace!(%token, "token");
            }
            debug!(
                language = %language,
                tokens = output.tokens.len(),
                diagnostics = output.diagnostics.len(),
                "scanned snippet"
            );
        } else {
            debug!(language = %language, bytes = snippet.len(), "no scanner for language");
        }

        Ok(language)
    }

    /// Resolve the snippet from the inline argument, `--file`, or stdin.
    fn load_snippet(&self) -> Result<String> {
        let max = self.args.max_source_bytes;
        match (&self.args.snippet, &self.args.file) {
            (Some(_), Some(_)) => Err(SnipError::Validation(
                "pass the snippet inline or with --file, not both".to_string(),
            )),
            (Some(text), None) if text == STDIN_MARKER => read_source(None, max),
            (Some(text), None) => {
                check_size(text.len() as u64, max)?;
                Ok(text.clone())
            },
            (None, Some(path)) => read_source(Some(path), max),
            (None, None) => Err(SnipError::Validation(
                "a snippet is required (inline, --file PATH, or '-' for stdin)".to_string(),
            )),
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = SupportedLanguage;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command and print the language label.
pub fn run_check(args: CheckArgs) -> Result<()> {
    debug!(command = CheckCommand::name(), ?args, "running command");
    let language = CheckCommand::new(args).execute()?;
    println!("{}", language.label());
    Ok(())
}
