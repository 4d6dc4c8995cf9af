// librc522/src/tasks/mod.rs

//! Producer/consumer coordination between acquisition and display.
//!
//! The acquisition task is the sole owner of the reader and its register
//! bus; the display task owns presentation state. The two communicate only
//! through the bounded scan queue, so neither can block the other beyond
//! the queue contract: the producer never waits (records are dropped when
//! the queue is full) and the consumer blocks until the next record.

pub mod acquisition;
pub mod display;
pub mod queue;

pub use acquisition::Acquisition;
pub use display::{Display, Indicator, LogPresenter, NullIndicator, Presenter};
pub use queue::{scan_queue, PublishResult, ScanConsumer, ScanProducer};
