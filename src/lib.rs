pub mod cache;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod logger;
pub mod report;
pub mod words;

pub use cache::{Allocation, CacheObserver, DrainEntry, Slot, WordCache, WriteEvent};
pub use error::{Error, Result};
pub use ingest::{IngestStats, ingest_reader, run_file};
