// src/completion.rs - Completion modes, candidate pools and context rules

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// When the completion popup may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum CompletionMode {
    /// Pop up automatically while typing.
    #[default]
    #[serde(rename = "full")]
    #[value(name = "full")]
    Full,
    /// Only on the explicit Ctrl+Space trigger.
    #[serde(rename = "key")]
    #[value(name = "key")]
    KeyTriggered,
    /// Never.
    #[serde(rename = "none")]
    #[value(name = "none")]
    Disabled,
}

impl CompletionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionMode::Full => "full",
            CompletionMode::KeyTriggered => "key",
            CompletionMode::Disabled => "none",
        }
    }

    /// Next mode in the full -> key -> none cycle.
    pub fn cycle(self) -> Self {
        match self {
            CompletionMode::Full => CompletionMode::KeyTriggered,
            CompletionMode::KeyTriggered => CompletionMode::Disabled,
            CompletionMode::Disabled => CompletionMode::Full,
        }
    }
}

impl fmt::Display for CompletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown completion mode '{0}' (expected full, key or none)")]
pub struct ParseModeError(pub String);

impl FromStr for CompletionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(CompletionMode::Full),
            "key" => Ok(CompletionMode::KeyTriggered),
            "none" => Ok(CompletionMode::Disabled),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Separator between a namespace and its members.
pub const PATH_SEPARATOR: char = '.';

/// Namespace whose members are offered after a dot.
pub const SPELL_NAMESPACE: &str = "spell";

const TOPLEVEL_CANDIDATES: &[&str] = &["spell"];
const SPELL_CANDIDATES: &[&str] = &["id", "name", "rank"];

pub fn toplevel_candidates() -> Vec<String> {
    TOPLEVEL_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

pub fn spell_candidates() -> Vec<String> {
    SPELL_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

/// Last whitespace-delimited token of the text before the cursor.
///
/// `None` when the text holds no token at all (empty or whitespace only).
pub fn context_token(line_before_cursor: &str) -> Option<&str> {
    line_before_cursor.split_whitespace().last()
}

/// Candidate pool for a context token.
///
/// Plain tokens complete against the top level; dotted tokens complete
/// against the members of the segment before the final dot, which only
/// `spell` has.
pub fn candidates_for(context: &str) -> Vec<String> {
    if !context.contains(PATH_SEPARATOR) {
        return toplevel_candidates();
    }
    match context.rsplit(PATH_SEPARATOR).nth(1) {
        Some(SPELL_NAMESPACE) => spell_candidates(),
        _ => Vec::new(),
    }
}
