//! The append-buffer/flush engine.
//!
//! Formatted lines accumulate in a growable in-memory buffer until a flush
//! writes them to the log file in one batch. The real-time path bypasses the
//! buffer entirely through [`MessageCache::write_single`]. Growth happens in
//! fixed increments so a hot logging path never pays per-call allocation for
//! the buffer itself.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{LogError, Result};
use crate::timestamp;

/// Default buffer capacity, also the increment used when the buffer fills up.
///
/// Configurable per logger through `LoggerConfig::init_cache_size`.
pub const DEFAULT_CACHE_SIZE: usize = 100_000;

/// Growable ordered buffer of finished log lines.
///
/// Owns the resize policy and every file-touching operation. Flushing is
/// destructive on success — the logical content is cleared and the lifetime
/// counter reset — but a failed flush leaves the buffer exactly as it was so
/// nothing is silently lost.
///
/// # Thread safety
///
/// Not internally synchronized. The cache mutates shared buffer state on
/// `add` and resets it on `flush_all`, so it is designed for a single
/// logical writer; wrap it in a mutex if concurrent callers are introduced.
pub struct MessageCache {
    lines: Vec<String>,
    grow_by: usize,
    logged_messages: u64,
    write_listeners: Vec<Box<dyn Fn() + Send>>,
}

impl MessageCache {
    /// Creates a cache with `grow_by` initial capacity; the same amount is
    /// reserved again each time the buffer fills up.
    pub fn new(grow_by: usize) -> Self {
        let grow_by = grow_by.max(1);
        Self {
            lines: Vec::with_capacity(grow_by),
            grow_by,
            logged_messages: 0,
            write_listeners: Vec::new(),
        }
    }

    /// Number of lines currently buffered.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current buffer capacity, in lines. Grows in `grow_by` increments.
    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Lifetime message counter. Reset to zero by a successful `flush_all`.
    pub fn logged_messages(&self) -> u64 {
        self.logged_messages
    }

    /// Appends a line to the buffer, growing it first if full.
    ///
    /// Never fails; growth is bounded only by available memory.
    pub fn add(&mut self, line: impl Into<String>) {
        if self.lines.len() == self.lines.capacity() {
            self.lines.reserve_exact(self.grow_by);
            debug!("log cache resized to {} entries", self.lines.capacity());
        }
        self.lines.push(line.into());
        self.logged_messages += 1;
    }

    /// Writes every buffered line to `path` in insertion order and clears
    /// the buffer. Returns the number of lines written.
    ///
    /// The file is truncated unless `append` is set. On error the buffer is
    /// left untouched; lines that made it into the file before the failure
    /// stay there.
    pub fn flush_all(&mut self, path: &Path, append: bool) -> Result<usize> {
        let file = open_log_file(path, append)?;
        let mut writer = BufWriter::new(file);
        for line in &self.lines {
            writeln!(writer, "{line}").map_err(|source| LogError::io(path, source))?;
        }
        writer.flush().map_err(|source| LogError::io(path, source))?;

        let written = self.lines.len();
        info!(
            "{} logs written: {}",
            timestamp::short_timestamp(),
            self.logged_messages
        );
        // Capacity is retained; only the logical content resets.
        self.lines.clear();
        self.logged_messages = 0;
        self.notify_write();
        Ok(written)
    }

    /// Appends only the most recently buffered line to `path`.
    ///
    /// No-op on an empty buffer.
    pub fn flush_last(&mut self, path: &Path) -> Result<()> {
        let Some(line) = self.lines.last() else {
            return Ok(());
        };
        let file = open_log_file(path, true)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{line}").map_err(|source| LogError::io(path, source))?;
        writer.flush().map_err(|source| LogError::io(path, source))?;
        self.notify_write();
        Ok(())
    }

    /// Writes exactly one line to `path`, bypassing the buffer.
    ///
    /// Used by the real-time path.
    pub fn write_single(&self, line: &str, path: &Path, append: bool) -> Result<()> {
        let file = open_log_file(path, append)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{line}").map_err(|source| LogError::io(path, source))?;
        writer.flush().map_err(|source| LogError::io(path, source))?;
        self.notify_write();
        Ok(())
    }

    /// Truncates the log file to a single empty line.
    ///
    /// Leaves the in-memory buffer alone.
    pub fn clear_file(&self, path: &Path) -> Result<()> {
        let file = open_log_file(path, false)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer).map_err(|source| LogError::io(path, source))?;
        writer.flush().map_err(|source| LogError::io(path, source))?;
        info!("log file cleared");
        self.notify_write();
        Ok(())
    }

    /// Registers a listener fired after every successful file-touching
    /// operation, for collaborators that want to react to writes.
    pub fn on_write(&mut self, listener: impl Fn() + Send + 'static) {
        self.write_listeners.push(Box::new(listener));
    }

    fn notify_write(&self) {
        for listener in &self.write_listeners {
            listener();
        }
    }
}

fn open_log_file(path: &Path, append: bool) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(LogError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    options.open(path).map_err(|source| LogError::io(path, source))
}
