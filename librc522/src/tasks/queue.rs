// librc522/src/tasks/queue.rs

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use log::debug;

use crate::types::ScanRecord;

/// Outcome of a non-blocking publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishResult {
    /// The record was queued.
    Queued,
    /// The queue was full; the record was dropped and the queued entries are
    /// untouched (drop-newest policy, see [`scan_queue`]).
    QueueFull,
    /// The consumer side is gone.
    Closed,
}

/// Create the bounded scan queue.
///
/// Saturation policy: **drop-newest**. When `capacity` records are already
/// queued, `try_publish` discards the new record and keeps the queued ones.
/// The producer gets the outcome back, and no record is ever delivered twice
/// or out of order.
pub fn scan_queue(capacity: usize) -> (ScanProducer, ScanConsumer) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (ScanProducer { tx }, ScanConsumer { rx })
}

/// Producer half of the scan queue.
#[derive(Debug, Clone)]
pub struct ScanProducer {
    tx: SyncSender<ScanRecord>,
}

impl ScanProducer {
    /// Publish without blocking; see [`scan_queue`] for the saturation
    /// policy.
    pub fn try_publish(&self, record: ScanRecord) -> PublishResult {
        match self.tx.try_send(record) {
            Ok(()) => PublishResult::Queued,
            Err(TrySendError::Full(_)) => {
                debug!("scan queue full, dropping newest record");
                PublishResult::QueueFull
            }
            Err(TrySendError::Disconnected(_)) => PublishResult::Closed,
        }
    }
}

/// Consumer half of the scan queue.
#[derive(Debug)]
pub struct ScanConsumer {
    rx: Receiver<ScanRecord>,
}

impl ScanConsumer {
    /// Block until the next record. `None` once every producer is gone.
    pub fn recv(&self) -> Option<ScanRecord> {
        self.rx.recv().ok()
    }
}
