//! Tests for AutotextError type

use super::*;

#[test]
fn test_config_error_display() {
    let error = AutotextError::Config("expected `=`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid config"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_word_list_error_names_the_file() {
    let error = AutotextError::WordList {
        path: "/tmp/words.json".to_string(),
        reason: "expected value".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/words.json"));
    assert!(msg.contains("expected value"));
}

#[test]
fn test_worker_unavailable_display() {
    let msg = AutotextError::WorkerUnavailable.to_string();
    assert!(msg.contains("worker"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = AutotextError::from(io_err);
    assert!(matches!(err, AutotextError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let debug_str = format!("{:?}", AutotextError::WorkerUnavailable);
    assert!(debug_str.contains("WorkerUnavailable"));
}
