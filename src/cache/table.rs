use super::event::{Allocation, CacheObserver, DrainEntry, WriteEvent};
use crate::error::{Error, Result};
use crate::words::hash_code;
use std::num::NonZeroUsize;

/// One bucket of the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(String),
}

impl Slot {
    pub fn word(&self) -> Option<&str> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(word) => Some(word.as_str()),
        }
    }
}

/// Fixed number of buckets, one word per bucket, last writer wins.
///
/// There is no lookup, removal or resizing. Words go in through
/// [`WordCache::update`] and come out once through
/// [`WordCache::drain_and_report`].
#[derive(Debug)]
pub struct WordCache {
    slots: Vec<Slot>,
    size: NonZeroUsize,
}

impl WordCache {
    /// Allocate `size` empty buckets.
    pub fn new(size: NonZeroUsize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size.get())
            .map_err(|_| Error::CacheAllocation(size.get()))?;
        slots.resize_with(size.get(), Slot::default);
        Ok(Self { slots, size })
    }

    pub fn size(&self) -> NonZeroUsize {
        self.size
    }

    pub fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Store a copy of `word` in bucket `index`, discarding any previous
    /// occupant.
    pub fn update(&mut self, index: usize, word: &str) -> Result<Allocation> {
        let size = self.size.get();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::BucketOutOfRange { index, size })?;

        match slot {
            Slot::Occupied(existing) => {
                existing.clear();
                existing.push_str(word);
                Ok(Allocation::Reused)
            }
            Slot::Empty => {
                *slot = Slot::Occupied(word.to_owned());
                Ok(Allocation::New)
            }
        }
    }

    /// Hash `word` into its bucket and store it there.
    pub fn insert(&mut self, word: &str) -> Result<WriteEvent> {
        let index = hash_code(word, self.size());
        let allocation = self.update(index, word)?;
        Ok(WriteEvent {
            word: word.to_owned(),
            index,
            allocation,
        })
    }

    /// Report every occupied bucket in index order, then release the table.
    ///
    /// Returns the number of occupied buckets reported.
    pub fn drain_and_report<O: CacheObserver>(self, mut observer: O) -> Result<usize> {
        let mut reported = 0;
        for (index, slot) in self.slots.into_iter().enumerate() {
            if let Slot::Occupied(word) = slot {
                observer.on_drain(&DrainEntry { index, word })?;
                reported += 1;
            }
        }
        observer.finish()?;
        Ok(reported)
    }
}
