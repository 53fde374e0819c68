//! Debounced background saving.
//!
//! [`SaveScheduler`] owns a worker thread fed through a channel. Each
//! scheduled document replaces the pending one and restarts the delay, so a
//! burst of edits produces a single write of the latest state once input
//! pauses.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::document::LogbookDocument;
use crate::error::{CarnetError, Result};

use super::Storage;

/// Delay between the last edit and the write.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(500);

/// How long the "saved" acknowledgment stays visible.
pub const DEFAULT_ACK_DURATION: Duration = Duration::from_secs(2);

/// Timing knobs of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTiming {
    pub delay: Duration,
    pub ack_duration: Duration,
}

impl Default for SaveTiming {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SAVE_DELAY,
            ack_duration: DEFAULT_ACK_DURATION,
        }
    }
}

/// A completed save, visible to the user for a short while.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub saved_at: Instant,
    pub expires_at: Instant,
}

impl Acknowledgment {
    /// Whether the acknowledgment is still showing at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

enum SaveCommand {
    Save(Box<LogbookDocument>),
    Cancel,
    Flush(Sender<Result<()>>),
    Clear(Sender<Result<()>>),
}

/// Debounces writes of the logbook to a [`Storage`].
pub struct SaveScheduler {
    tx: Option<Sender<SaveCommand>>,
    worker: Option<JoinHandle<()>>,
    last_ack: Arc<Mutex<Option<Acknowledgment>>>,
    storage: Arc<dyn Storage>,
}

impl SaveScheduler {
    /// Start the worker thread.
    pub fn new(storage: Arc<dyn Storage>, timing: SaveTiming) -> Self {
        let (tx, rx) = mpsc::channel();
        let last_ack = Arc::new(Mutex::new(None));

        let worker = {
            let last_ack = Arc::clone(&last_ack);
            let storage = Arc::clone(&storage);
            thread::Builder::new()
                .name("carnet-save".to_string())
                .spawn(move || run_worker(rx, storage, timing, last_ack))
                .map_err(|e| warn!("Could not start save worker: {}", e))
                .ok()
        };

        Self {
            tx: Some(tx),
            worker,
            last_ack,
            storage,
        }
    }

    /// Queue `document` for writing once the delay elapses without a newer call.
    pub fn schedule(&self, document: &LogbookDocument) {
        self.send(SaveCommand::Save(Box::new(document.clone())));
    }

    /// Drop the pending write, if any.
    pub fn cancel(&self) {
        self.send(SaveCommand::Cancel);
    }

    /// Write the pending document now and wait for the result.
    ///
    /// Succeeds trivially when nothing is pending.
    pub fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = mpsc::channel();
        if !self.send(SaveCommand::Flush(done_tx)) {
            return Err(save_worker_gone());
        }
        done_rx.recv().unwrap_or_else(|_| Err(save_worker_gone()))
    }

    /// Drop the pending write and remove the record.
    ///
    /// Runs on the worker after any write already in progress, so that
    /// write cannot land after the record is gone.
    pub fn clear(&self) -> Result<()> {
        let (done_tx, done_rx) = mpsc::channel();
        if !self.send(SaveCommand::Clear(done_tx)) {
            return self.storage.clear();
        }
        done_rx.recv().unwrap_or_else(|_| Err(save_worker_gone()))
    }

    /// The latest acknowledgment, if it has not expired yet.
    pub fn acknowledgment(&self) -> Option<Acknowledgment> {
        let now = Instant::now();
        let last = *self.last_ack.lock().unwrap_or_else(|e| e.into_inner());
        last.filter(|ack| ack.is_visible_at(now))
    }

    fn send(&self, command: SaveCommand) -> bool {
        match &self.tx {
            Some(tx) if self.worker.is_some() => tx.send(command).is_ok(),
            _ => false,
        }
    }
}

impl Drop for SaveScheduler {
    /// Closing the channel makes the worker write whatever is pending and exit.
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Save worker panicked");
            }
        }
    }
}

fn save_worker_gone() -> CarnetError {
    CarnetError::Other(anyhow::anyhow!("save worker is not running"))
}

fn run_worker(
    rx: Receiver<SaveCommand>,
    storage: Arc<dyn Storage>,
    timing: SaveTiming,
    last_ack: Arc<Mutex<Option<Acknowledgment>>>,
) {
    let mut pending: Option<Box<LogbookDocument>> = None;

    loop {
        let command = if pending.is_some() {
            match rx.recv_timeout(timing.delay) {
                Ok(command) => command,
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(doc) = pending.take() {
                        let _ = write_document(storage.as_ref(), &doc, timing, &last_ack);
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(command) => command,
                Err(_) => break,
            }
        };

        match command {
            SaveCommand::Save(doc) => {
                if pending.is_some() {
                    debug!("Superseding pending save");
                }
                pending = Some(doc);
            }
            SaveCommand::Cancel => {
                if pending.take().is_some() {
                    debug!("Pending save cancelled");
                }
            }
            SaveCommand::Flush(done) => {
                let result = match pending.take() {
                    Some(doc) => write_document(storage.as_ref(), &doc, timing, &last_ack),
                    None => Ok(()),
                };
                let _ = done.send(result);
            }
            SaveCommand::Clear(done) => {
                if pending.take().is_some() {
                    debug!("Pending save dropped by clear");
                }
                let _ = done.send(storage.clear());
            }
        }
    }

    if let Some(doc) = pending.take() {
        let _ = write_document(storage.as_ref(), &doc, timing, &last_ack);
    }
}

fn write_document(
    storage: &dyn Storage,
    document: &LogbookDocument,
    timing: SaveTiming,
    last_ack: &Mutex<Option<Acknowledgment>>,
) -> Result<()> {
    let result = serde_json::to_string(document)
        .map_err(CarnetError::from)
        .and_then(|json| storage.write(&json));

    match &result {
        Ok(()) => {
            let saved_at = Instant::now();
            *last_ack.lock().unwrap_or_else(|e| e.into_inner()) = Some(Acknowledgment {
                saved_at,
                expires_at: saved_at + timing.ack_duration,
            });
            debug!("Logbook saved to {}", storage.describe());
        }
        Err(e) => warn!("Failed to save logbook to {}: {}", storage.describe(), e),
    }

    result
}
