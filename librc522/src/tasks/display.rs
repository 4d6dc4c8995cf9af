// librc522/src/tasks/display.rs

use std::thread::{self, JoinHandle};

use log::info;

use crate::tasks::queue::ScanConsumer;
use crate::types::{ScanRecord, ScanStatus};

/// Renders a scan outcome. Pixel-level drawing stays behind this seam.
pub trait Presenter {
    /// Show one record.
    fn present(&mut self, record: &ScanRecord);
}

/// Binary detection indicator (an LED on the reference hardware).
pub trait Indicator {
    /// Drive the indicator.
    fn set(&mut self, on: bool);
}

/// Presenter that routes records to the log facade.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present(&mut self, record: &ScanRecord) {
        match record.status() {
            ScanStatus::Success => info!(
                "tag {} type {}: success",
                record.uid().to_hex(),
                record.tag_type().to_hex()
            ),
            ScanStatus::Unsuccessful => info!("tag not detected"),
        }
    }
}

/// Indicator for hosts without an output line.
#[derive(Debug, Default)]
pub struct NullIndicator;

impl Indicator for NullIndicator {
    fn set(&mut self, _on: bool) {}
}

/// Consumer task: blocks on the scan queue and reflects each record on the
/// presenter and the indicator.
pub struct Display<P, I> {
    queue: ScanConsumer,
    presenter: P,
    indicator: I,
}

impl<P: Presenter, I: Indicator> Display<P, I> {
    /// Pair the consumer half of the scan queue with the output devices.
    pub fn new(queue: ScanConsumer, presenter: P, indicator: I) -> Self {
        Self {
            queue,
            presenter,
            indicator,
        }
    }

    /// Wait for and handle one record. False once the producer is gone.
    pub fn service_one(&mut self) -> bool {
        let Some(record) = self.queue.recv() else {
            return false;
        };
        self.indicator.set(record.status() == ScanStatus::Success);
        self.presenter.present(&record);
        true
    }

    /// Handle records until the queue closes.
    pub fn run(mut self) {
        while self.service_one() {}
    }

    /// Run on a dedicated thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>>
    where
        P: Send + 'static,
        I: Send + 'static,
    {
        thread::Builder::new()
            .name("rc522-display".into())
            .spawn(move || self.run())
    }
}
