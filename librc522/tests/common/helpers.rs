// helpers.rs — mock-reader construction plus shared recording outputs

use std::sync::{Arc, Mutex};

pub use librc522::test_support::{detection_exchanges, initialized_mock_reader, mock_with_exchanges};

use librc522::tasks::{Indicator, Presenter};
use librc522::types::ScanRecord;

/// Presenter that appends every record to shared storage, for asserting on
/// what a display thread rendered.
#[derive(Clone, Default)]
pub struct SharedPresenter {
    pub shown: Arc<Mutex<Vec<ScanRecord>>>,
}

impl Presenter for SharedPresenter {
    fn present(&mut self, record: &ScanRecord) {
        self.shown.lock().unwrap().push(*record);
    }
}

/// Indicator that appends every transition to shared storage.
#[derive(Clone, Default)]
pub struct SharedIndicator {
    pub states: Arc<Mutex<Vec<bool>>>,
}

impl Indicator for SharedIndicator {
    fn set(&mut self, on: bool) {
        self.states.lock().unwrap().push(on);
    }
}
