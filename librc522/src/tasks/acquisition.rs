// librc522/src/tasks/acquisition.rs

use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info};

use crate::bus::traits::RegisterBus;
use crate::picc::RequestMode;
use crate::reader::{Initialized, Reader};
use crate::tasks::queue::{PublishResult, ScanProducer};
use crate::types::{ScanRecord, TagType};

/// Pause between acquisition cycles.
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_millis(2000);

/// Periodic producer: runs one scan cycle per interval and publishes the
/// result to the scan queue. Owns the reader, and with it the register bus;
/// nothing else may touch the device while this task exists.
pub struct Acquisition<B> {
    reader: Reader<B, Initialized>,
    queue: ScanProducer,
    interval: Duration,
}

impl<B: RegisterBus> Acquisition<B> {
    /// Pair an initialized reader with the producer half of the scan queue.
    pub fn new(reader: Reader<B, Initialized>, queue: ScanProducer) -> Self {
        Self {
            reader,
            queue,
            interval: DEFAULT_SCAN_INTERVAL,
        }
    }

    /// Override the inter-cycle pause.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// One acquisition cycle.
    ///
    /// Request, then anti-collision regardless of the request outcome; the
    /// record is successful only when both succeeded. On any failure the UID
    /// length is forced to zero; the tag type from a successful request is
    /// kept either way.
    pub fn scan_once(&mut self) -> ScanRecord {
        let request = self.reader.request(RequestMode::Idle);
        let tag_type = match &request {
            Ok(tag_type) => {
                debug!("request answered, tag type {}", tag_type.to_hex());
                *tag_type
            }
            Err(e) => {
                debug!("request failed: {}", e);
                TagType::default()
            }
        };

        let anticoll = self.reader.anticollision();
        match (&request, anticoll) {
            (Ok(_), Ok(uid)) => {
                info!(
                    "tag detected, uid {} type {}",
                    uid.to_hex(),
                    tag_type.to_hex()
                );
                ScanRecord::success(uid, tag_type)
            }
            (_, result) => {
                if let Err(e) = result {
                    debug!("anticollision failed: {}", e);
                }
                debug!("no valid tag this cycle");
                ScanRecord::unsuccessful(tag_type)
            }
        }
    }

    /// Scan, publish, sleep, forever. Returns once the display side is gone;
    /// a full queue only drops the current record and keeps the loop running.
    pub fn run(mut self) {
        loop {
            let record = self.scan_once();
            if self.queue.try_publish(record) == PublishResult::Closed {
                debug!("scan queue closed, stopping acquisition");
                return;
            }
            thread::sleep(self.interval);
        }
    }

    /// Run on a dedicated thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>>
    where
        B: Send + 'static,
    {
        thread::Builder::new()
            .name("rc522-acquisition".into())
            .spawn(move || self.run())
    }
}
