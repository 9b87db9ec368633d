//! Language tags accepted by `snipcheck check`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SnipError;

/// A language tag a snippet can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    /// `typescript`; snippets are run through the scanner.
    TypeScript,
    /// `java`
    Java,
    /// `rust`
    Rust,
}

impl SupportedLanguage {
    /// Every accepted tag, in display order.
    pub const ALL: [SupportedLanguage; 3] = [Self::TypeScript, Self::Java, Self::Rust];

    /// The static label reported for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Java => "java",
            Self::Rust => "rust",
        }
    }

    /// Whether snippets in this language are scanned.
    pub fn has_scanner(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

impl FromStr for SupportedLanguage {
    type Err = SnipError;

    /// Parses a tag. Matching is exact; `TypeScript` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.label() == s)
            .ok_or_else(|| {
                let accepted: Vec<_> = Self::ALL.iter().map(|l| l.label()).collect();
                SnipError::Validation(format!(
                    "unsupported language '{}' (expected one of: {})",
                    s,
                    accepted.join(", ")
                ))
            })
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
