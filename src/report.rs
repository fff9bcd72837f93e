//! Rendering of cache activity.
//!
//! The cache and ingest loop only emit [`WriteEvent`]s and [`DrainEntry`]s;
//! everything that ends up on stdout is produced here.

use crate::cache::{CacheObserver, DrainEntry, WriteEvent};
use crate::error::Result;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use std::io::Write;

/// Line-oriented trace, one line per write and one per drained bucket.
pub struct TraceWriter<W: Write> {
    out: W,
    show_writes: bool,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_writes: true,
        }
    }

    /// Only print the drain report.
    pub fn quiet(mut self) -> Self {
        self.show_writes = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CacheObserver for TraceWriter<W> {
    fn on_write(&mut self, event: &WriteEvent) -> Result<()> {
        if self.show_writes {
            writeln!(
                self.out,
                "Word \"{}\" ==> {} ({})",
                event.word, event.index, event.allocation
            )?;
        }
        Ok(())
    }

    fn on_drain(&mut self, entry: &DrainEntry) -> Result<()> {
        writeln!(self.out, "Cache index {} ==> \"{}\"", entry.index, entry.word)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Write trace as it happens, drain report as a table at the end.
pub struct TableReport<W: Write> {
    trace: TraceWriter<W>,
    rows: Vec<DrainEntry>,
}

impl<W: Write> TableReport<W> {
    pub fn new(trace: TraceWriter<W>) -> Self {
        Self {
            trace,
            rows: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.trace.into_inner()
    }

    fn render(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["INDEX", "WORD"]);

        for row in &self.rows {
            table.add_row(vec![
                Cell::new(row.index).set_alignment(CellAlignment::Right),
                Cell::new(&row.word),
            ]);
        }
        table
    }
}

impl<W: Write> CacheObserver for TableReport<W> {
    fn on_write(&mut self, event: &WriteEvent) -> Result<()> {
        self.trace.on_write(event)
    }

    fn on_drain(&mut self, entry: &DrainEntry) -> Result<()> {
        self.rows.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.rows.is_empty() {
            let table = self.render();
            writeln!(self.trace.out, "{table}")?;
        }
        self.trace.finish()
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct EventLog {
    pub writes: Vec<WriteEvent>,
    pub drained: Vec<DrainEntry>,
    pub finished: bool,
}

impl CacheObserver for EventLog {
    fn on_write(&mut self, event: &WriteEvent) -> Result<()> {
        self.writes.push(event.clone());
        Ok(())
    }

    fn on_drain(&mut self, entry: &DrainEntry) -> Result<()> {
        self.drained.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
