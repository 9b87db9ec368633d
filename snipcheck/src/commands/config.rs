//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file as a
//! starting point for `snipcheck.toml`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{Result, SnipError};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// The configuration in effect.
    pub config: Config,
    /// Write here instead of printing.
    pub write: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Execute the command. Returns the TOML text when printing.
    pub fn run(&self) -> Result<Option<String>> {
        match &self.args.write {
            Some(path) => {
                self.write_to(path)?;
                Ok(None)
            },
            None => self.args.config.to_toml().map(Some),
        }
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        if path.exists() && !self.args.force {
            return Err(SnipError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        self.args.config.save_to_path(path)?;
        info!(path = %path.display(), "wrote configuration");
        Ok(())
    }
}

impl Command for ConfigCommand {
    type Args = ConfigArgs;
    type Output = Option<String>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "config"
    }
}

/// Run the config command.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    tracing::debug!(command = ConfigCommand::name(), "running command");
    if let Some(text) = ConfigCommand::new(args).execute()? {
        print!("{}", text);
    }
    Ok(())
}
