//! Purpose: Verify that absent results are paired with one diagnostic event.
//! Exports: Integration tests only.
//! Role: Capture `tracing` output with a scoped fmt subscriber and inspect it.
//! Invariants: Assertions target op/kind fields, not full message wording.

use jsonutils::{data_to_json_text, decode_from_json_text, json_text_to_map, map_to_json_text};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(filter: &str, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).expect("utf8 log output")
}

fn warn_lines(logs: &str) -> Vec<&str> {
    logs.lines().filter(|line| line.contains("WARN")).collect()
}

#[test]
fn each_failure_logs_one_warning_with_op_and_kind() {
    let logs = capture("jsonutils=warn", || {
        assert!(map_to_json_text(None).is_none());
        assert!(json_text_to_map("[1]").is_none());
        assert!(data_to_json_text(&[0xff]).is_none());
        assert!(decode_from_json_text::<u8>("{").is_none());
    });

    let lines = warn_lines(&logs);
    assert_eq!(lines.len(), 4, "logs: {logs}");
    assert!(lines[0].contains("op=\"map_to_json_text\"") && lines[0].contains("invalid-input"));
    assert!(lines[1].contains("op=\"json_text_to_map\"") && lines[1].contains("shape-mismatch"));
    assert!(lines[2].contains("op=\"data_to_json_text\"") && lines[2].contains("utf8"));
    assert!(lines[3].contains("op=\"decode_from_json_text\"") && lines[3].contains("parse"));
}

#[test]
fn successes_do_not_warn() {
    let logs = capture("jsonutils=warn", || {
        assert!(json_text_to_map("{}").is_some());
        assert!(data_to_json_text(b"{}").is_some());
    });
    assert!(warn_lines(&logs).is_empty(), "logs: {logs}");
}

#[test]
fn successes_trace_when_enabled() {
    let logs = capture("jsonutils=trace", || {
        assert!(json_text_to_map("{}").is_some());
    });
    assert!(logs.contains("conversion succeeded"), "logs: {logs}");
}

#[test]
fn invalid_bytes_are_escaped_in_logs() {
    let logs = capture("jsonutils=warn", || {
        assert!(data_to_json_text(&[b'o', b'k', 0xff]).is_none());
    });
    assert!(logs.to_ascii_lowercase().contains("\\xff"), "logs: {logs}");
}
