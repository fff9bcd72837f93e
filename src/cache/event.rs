use crate::error::Result;
use std::fmt;

/// Whether a write created its bucket or replaced the previous occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    New,
    Reused,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allocation::New => f.write_str("new"),
            Allocation::Reused => f.write_str("reused"),
        }
    }
}

/// One write into the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteEvent {
    pub word: String,
    pub index: usize,
    pub allocation: Allocation,
}

/// Final content of one occupied bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrainEntry {
    pub index: usize,
    pub word: String,
}

/// Receives cache activity. Implementations decide how (or whether) to
/// render it.
pub trait CacheObserver {
    fn on_write(&mut self, event: &WriteEvent) -> Result<()>;

    fn on_drain(&mut self, entry: &DrainEntry) -> Result<()>;

    /// Called once after the last drain entry.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: CacheObserver + ?Sized> CacheObserver for &mut T {
    fn on_write(&mut self, event: &WriteEvent) -> Result<()> {
        (**self).on_write(event)
    }

    fn on_drain(&mut self, entry: &DrainEntry) -> Result<()> {
        (**self).on_drain(entry)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
