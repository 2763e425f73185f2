use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Delete,
}

/// What an operation did to the queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Stored,
    Removed,
    Empty,
}

/// Log entry recording an operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub seq: u64,
    pub op: Op,
    pub item: Option<T>, // added or removed item, None on an empty delete
    pub outcome: Outcome,
    pub len_after: usize,
    pub capacity_after: usize,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {:?} {:?} -> {:?} (len {}, capacity {})",
            self.seq, self.op, self.item, self.outcome, self.len_after, self.capacity_after,
        )
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    next_seq: u64,
}

impl<T> Logger<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }

    /// Log an operation
    pub fn record(&mut self, op: Op, item: Option<T>, outcome: Outcome, len_after: usize, capacity_after: usize) {
        // --- Negative-space assertion: outcome must match operation ---
        match op {
            Op::Add => assert_eq!(outcome, Outcome::Stored, "Add must result in Stored"),
            Op::Delete => assert!(
                matches!(outcome, Outcome::Removed | Outcome::Empty),
                "Delete must result in Removed or Empty"
            ),
        }

        // --- Negative-space assertion: only an empty delete carries no item ---
        assert_eq!(
            item.is_none(),
            outcome == Outcome::Empty,
            "Item must be present unless the queue was empty"
        );

        let seq = self.next_seq;
        self.next_seq += 1;

        let before = self.entries.len();
        self.entries.push(LogEntry {
            seq,
            op,
            item,
            outcome,
            len_after,
            capacity_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(self.entries.len(), before + 1, "Logger must increase by exactly one entry");
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }
}

impl<T> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Append entries to `path` as NDJSON, creating the file if needed
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: impl AsRef<Path>) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path.as_ref())?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?; // one JSON object per line
    }
    tracing::debug!("Appended {} log entries to {}", log.len(), path.as_ref().display());
    Ok(())
}
