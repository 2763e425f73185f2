use std::fmt::Debug;
use std::path::Path;

use serde::Serialize;

pub use crate::core::{
    config::QueueConfig,
    log::{LogEntry, Logger, Op, Outcome, append_logs},
    queue::{Queue, SafeQueue},
};
use crate::error::Result;

/// Queue that records every operation it applies
pub struct LoggedQueue<T> {
    queue: Queue<T>,
    logger: Logger<T>,
}

impl<T: Clone + Debug> LoggedQueue<T> {
    /// Create a new LoggedQueue
    pub fn new() -> Self {
        Self::from_queue(Queue::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_queue(Queue::with_capacity(capacity))
    }

    /// Build from validated settings
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    fn from_queue(queue: Queue<T>) -> Self {
        Self {
            queue,
            logger: Logger::new(),
        }
    }

    /// Add with logging
    pub fn add(&mut self, item: T) {
        let capacity_before = self.queue.capacity();
        self.queue.add(item.clone());

        let capacity = self.queue.capacity();
        if capacity != capacity_before {
            tracing::debug!(from = capacity_before, to = capacity, "queue buffer grew");
        }
        tracing::debug!(?item, len = self.queue.len(), "add");

        self.logger
            .record(Op::Add, Some(item), Outcome::Stored, self.queue.len(), capacity);
    }

    /// Delete the head, logging whether anything was there
    pub fn delete(&mut self) -> Option<T> {
        let item = self.queue.delete();
        let outcome = match item {
            Some(ref removed) => {
                tracing::debug!(item = ?removed, len = self.queue.len(), "delete");
                Outcome::Removed
            }
            None => {
                tracing::trace!("delete on empty queue");
                Outcome::Empty
            }
        };

        self.logger.record(
            Op::Delete,
            item.clone(),
            outcome,
            self.queue.len(),
            self.queue.capacity(),
        );
        item
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Borrow the underlying queue
    pub fn queue(&self) -> &Queue<T> {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        self.logger.entries().to_vec()
    }

    /// Append the log to `path` as NDJSON
    pub fn export_logs(&self, path: impl AsRef<Path>) -> Result<()>
    where
        T: Serialize,
    {
        append_logs(self.logger.entries(), path)
    }
}

impl<T: Clone + Debug> Default for LoggedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
