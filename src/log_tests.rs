//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the
//! Engine-hosted global logger used by the engine_*! macros. Tests that
//! swap the global logger are serialized with serial_test.

use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::nebula::Engine;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug_format() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula::RecordBuffer".to_string(),
        message: "allocated".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "nebula::RecordBuffer");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula::SlotPool".to_string(),
        message: "pool exhausted".to_string(),
        file: Some("slot_pool.rs"),
        line: Some(42),
    };

    assert_eq!(entry.file, Some("slot_pool.rs"));
    assert_eq!(entry.line, Some(42));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    // Just verify no branch panics
    let logger = DefaultLogger;
    let timestamp = SystemTime::now();

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        let entry = LogEntry {
            severity,
            timestamp,
            source: "test".to_string(),
            message: format!("{:?} message", severity),
            file: None,
            line: None,
        };
        logger.log(&entry);
    }
}

#[test]
fn test_default_logger_with_file_line() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "test".to_string(),
        message: "detailed error".to_string(),
        file: Some("test.rs"),
        line: Some(7),
    });
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

/// Logger that records entries for assertions
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                entries: Arc::clone(&entries),
            },
            entries,
        )
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_set_logger_captures_macro_output() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    crate::engine_info!("nebula::test", "hello {}", 42);

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Info);
        assert_eq!(entries[0].source, "nebula::test");
        assert_eq!(entries[0].message, "hello 42");
        assert!(entries[0].file.is_none());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_carries_file_line() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    crate::engine_error!("nebula::test", "boom");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Error);
        assert!(entries[0].file.is_some());
        assert!(entries[0].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_failed_validation_is_logged() {
    use crate::record::{LayoutOptions, RecordLayout};

    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    // Schema errors go through the log-and-return path
    let result = RecordLayout::new(vec![], LayoutOptions::empty());
    assert!(result.is_err());

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Error);
        assert_eq!(entries[0].source, "nebula::RecordLayout");
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    crate::engine_info!("nebula::test", "after reset");
    assert!(entries.lock().unwrap().is_empty());
}
