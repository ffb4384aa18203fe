#![cfg(feature = "logging")]

use std::sync::Mutex;

use linked_sequence::{LinkedSequence, SequenceError};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

// The logger is process-wide, so everything is checked from a single test.
#[test]
fn rejections_and_releases_are_logged() {
    log::set_logger(&LOGGER).expect("no other logger in this test binary");
    log::set_max_level(LevelFilter::Trace);

    let mut seq: LinkedSequence<u32> = LinkedSequence::new();
    assert_eq!(seq.pop(), Err(SequenceError::Empty));

    let other: LinkedSequence<u32> = (1..=2).collect();
    assert_eq!(seq.insert(other.begin(), 0), Err(SequenceError::InvalidCursor));

    seq.push(1);
    seq.clear();

    let records = RECORDS.lock().unwrap();
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.contains("rejected pop")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.contains("rejected insert")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Trace && msg.contains("Releasing 1 element(s)")));
}
