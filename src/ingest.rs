//! File → lines → tokens → words → buckets.

use crate::cache::{Allocation, CacheObserver, WordCache};
use crate::error::{Error, Result};
use crate::words::{
    LineCursor, MAX_LINE_LEN, MAX_WORD_LEN, MIN_WORD_LEN, load_token, strip_word,
};
use log::{debug, info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;

/// Counters collected over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub tokens: usize,
    pub cached: usize,
    pub discarded: usize,
    pub allocations: usize,
    pub reuses: usize,
    pub occupied: usize,
}

/// Feed every line of `reader` through the cache, reporting each write.
///
/// Stops at the first error; the cache is left as it was at that point.
pub fn ingest_reader<R, O>(
    mut reader: R,
    cache: &mut WordCache,
    observer: &mut O,
) -> Result<IngestStats>
where
    R: BufRead,
    O: CacheObserver + ?Sized,
{
    let mut stats = IngestStats::default();
    let mut line = Vec::with_capacity(MAX_LINE_LEN);
    let mut word = String::with_capacity(MAX_WORD_LEN);

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        if line.len() > MAX_LINE_LEN {
            return Err(Error::LineTooLong {
                line: stats.lines,
                len: line.len(),
            });
        }

        for token in LineCursor::new(&line).tokens() {
            stats.tokens += 1;
            if token.len() > MAX_WORD_LEN {
                return Err(Error::WordTooLong {
                    line: stats.lines,
                    len: token.len(),
                });
            }

            load_token(&mut word, token);
            strip_word(&mut word);
            trace!("line {}: token {:?}", stats.lines, word);

            if word.len() < MIN_WORD_LEN {
                if !word.is_empty() {
                    debug!("Discarding short word {:?}", word);
                }
                stats.discarded += 1;
                continue;
            }

            let event = cache.insert(&word)?;
            match event.allocation {
                Allocation::New => stats.allocations += 1,
                Allocation::Reused => stats.reuses += 1,
            }
            stats.cached += 1;
            observer.on_write(&event)?;
        }
    }

    Ok(stats)
}

/// Process one file end to end: open, ingest every line, then drain the
/// cache into `observer`.
pub fn run_file<O: CacheObserver>(
    path: &Path,
    size: NonZeroUsize,
    mut observer: O,
) -> Result<IngestStats> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading {} into {} buckets", path.display(), size);

    let mut cache = WordCache::new(size)?;
    let mut stats = ingest_reader(BufReader::new(file), &mut cache, &mut observer)?;
    stats.occupied = cache.drain_and_report(observer)?;

    info!(
        "Done: {} lines, {} tokens, {} cached ({} new, {} reused), {} discarded, {} buckets occupied",
        stats.lines,
        stats.tokens,
        stats.cached,
        stats.allocations,
        stats.reuses,
        stats.discarded,
        stats.occupied
    );
    Ok(stats)
}
