use clap::Parser;
use std::path::PathBuf;

use crate::completion::CompletionMode;

#[derive(Debug, Default, Parser)]
#[command(name = "codepad")]
#[command(version = "0.1.0")]
#[command(about = "A terminal code editor with contextual completion")]
pub struct CliArgs {
    /// File to open (created on save if it does not exist)
    pub file: Option<PathBuf>,

    /// When the completion popup appears: full, key (Ctrl+Space only) or none
    #[arg(long, short = 'c', value_enum)]
    pub completion: Option<CompletionMode>,

    /// Config file to use instead of the discovered one
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path exists (following symlinks)
    pub fn exists(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).is_ok()
        } else {
            false
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
