use crate::error::{Error, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordcache")]
#[command(about = "Cache the words of a text file in a fixed-size, overwrite-on-collision table")]
#[command(version)]
pub struct Cli {
    /// Number of cache buckets (must be positive)
    #[arg(allow_negative_numbers = true)]
    pub size: i64,

    /// Text file to read
    pub file: PathBuf,

    /// How to print the final bucket contents
    #[arg(long, short = 'r', value_enum, default_value_t = ReportStyle::Trace)]
    pub report: ReportStyle,

    /// Do not print a line for every cache write
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStyle {
    /// One line per occupied bucket
    Trace,
    /// A single table of occupied buckets
    Table,
}

impl Cli {
    /// Cache size as a bucket count, rejecting zero and negative values.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        usize::try_from(self.size)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("size must be positive, got {}", self.size))
            })
    }
}
