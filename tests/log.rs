#![cfg(feature = "log")]

use std::sync::Mutex;

use kvec::KVec;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLog {
    records: Mutex<Vec<String>>,
}

impl Log for CaptureLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == "kvec::storage" && metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLog = CaptureLog {
    records: Mutex::new(Vec::new()),
};

// a single test: the global logger can only be installed once per process
#[test]
fn buffer_lifecycle_is_traced() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut v = KVec::<u64>::with_capacity(2);
    v.extend([1, 2, 3]);
    drop(v);

    let records = CAPTURE.records.lock().unwrap().clone();
    assert_eq!(
        records,
        [
            "allocated 2 slots (16 bytes)",
            "allocated 4 slots (32 bytes)",
            "relocated 2 values: capacity 2 -> 4",
            "released 2 slots",
            "released 4 slots",
        ]
    );
}
