//! Integration tests for warnings emitted while decoding.
//!
//! The logger is process-wide, so this file installs its own capturing
//! logger and keeps everything in a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use scope_style::{FontSize, ThemeDocument, UNSET_FONT_SIZE};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

#[test]
fn test_malformed_font_size_warns() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Absent: unset without a warning.
    assert_eq!(FontSize::parse_lossy(None).raw(), UNSET_FONT_SIZE);
    assert!(take_warnings().is_empty());

    // Malformed: unset, and the decode error is reported.
    assert_eq!(FontSize::parse_lossy(Some("xyz")).raw(), UNSET_FONT_SIZE);
    assert_eq!(take_warnings(), vec!["unsupported font size format: xyz"]);

    assert_eq!(FontSize::parse_lossy(Some("10px")).raw(), UNSET_FONT_SIZE);
    assert_eq!(
        take_warnings(),
        vec!["unsupported font size unit: px (10px)"]
    );

    // Well-formed: no warning.
    assert_eq!(FontSize::parse_lossy(Some("12pt")).raw(), 12.0);
    assert!(take_warnings().is_empty());

    // The same path is taken when decoding theme documents.
    let doc = ThemeDocument::from_json(
        r#"{ "settings": [ { "scope": "markup", "settings": { "fontSize": "huge" } } ] }"#,
    )
    .unwrap();
    let rule = doc.rules().next().unwrap().to_style_rule();
    assert_eq!(rule.font_size, FontSize::Unset);
    assert_eq!(take_warnings(), vec!["unsupported font size format: huge"]);
}
