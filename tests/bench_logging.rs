use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use solsim::bench_gravity;

/// Collects formatted `info` records
struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn bench_gravity_reports_through_log() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Info);

    bench_gravity();

    let lines = CAPTURE.0.lock().unwrap();
    let rows: Vec<&String> = lines.iter().filter(|l| l.starts_with("N = ")).collect();
    assert_eq!(rows.len(), 6, "{:?}", lines);
    assert!(rows[0].contains("pairs =     4950"), "{}", rows[0]);
}
