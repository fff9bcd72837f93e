use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input file <{}> does not exist or is not readable", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is {len} bytes, longer than the {max} byte limit", max = crate::words::MAX_LINE_LEN)]
    LineTooLong { line: usize, len: usize },

    #[error("Word on line {line} is {len} bytes, longer than the {max} byte limit", max = crate::words::MAX_WORD_LEN)]
    WordTooLong { line: usize, len: usize },

    #[error("Bucket {index} is outside a cache of {size} slots")]
    BucketOutOfRange { index: usize, size: usize },

    #[error("Cannot allocate a cache of {0} slots")]
    CacheAllocation(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_ARGUMENTS: i32 = 2;
    pub const FILE_NOT_READABLE: i32 = 3;
    pub const INPUT_TOO_LONG: i32 = 4;
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::CacheAllocation(_) => exit_code::INVALID_ARGUMENTS,
            Error::FileOpen { .. } => exit_code::FILE_NOT_READABLE,
            Error::LineTooLong { .. } | Error::WordTooLong { .. } => exit_code::INPUT_TOO_LONG,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}
