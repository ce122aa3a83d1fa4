//! Integration tests for the logging pipeline
//!
//! These tests verify:
//! - Level gating across every (threshold, level) pair
//! - Text template and JSON output shapes
//! - Call-site attribution from code outside the library
//! - Fatal and Panic ordering guarantees
//! - Thread safety of a shared logger

mod fixture;

use flog::prelude::*;
use flog::{errorf, fields, infof};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

fn capture(level: LogLevel, format: &str) -> (Logger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .min_level(level)
        .format(format)
        .use_colors(false)
        .clock(FixedClock("2025-01-08 10:30:45".into()))
        .terminator(UnwindExit)
        .appender(memory.clone())
        .build()
        .expect("valid configuration");
    (logger, memory)
}

fn json_capture(fields: bool) -> (Logger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .json(true)
        .write_fields(fields)
        .clock(FixedClock("2025-01-08 10:30:45".into()))
        .appender(memory.clone())
        .build()
        .expect("valid configuration");
    (logger, memory)
}

/// Call the plain method for `level`, swallowing terminating effects.
fn call_level(entry: &Entry<'_>, level: LogLevel) {
    let args: [FieldValue; 1] = ["msg".into()];
    match level {
        LogLevel::Panic => {
            let _ = entry.panic(&args);
        }
        LogLevel::Fatal => {
            let _ = catch_unwind(AssertUnwindSafe(|| entry.fatal(&args)));
        }
        LogLevel::Error => entry.error(&args),
        LogLevel::Warn => entry.warn(&args),
        LogLevel::Info => entry.info(&args),
        LogLevel::Debug => entry.debug(&args),
        LogLevel::Trace => entry.trace(&args),
    }
}

#[test]
fn test_level_gate_all_combinations() {
    for threshold in LogLevel::ALL {
        for level in LogLevel::ALL {
            let (logger, memory) = capture(threshold, "{msg}");
            call_level(&logger.entry(), level);

            let expected = threshold >= level.gate_level();
            assert_eq!(
                memory.len(),
                usize::from(expected),
                "threshold={} level={}",
                threshold,
                level
            );
        }
    }
}

#[test]
fn test_text_template_exact() {
    let (logger, memory) = capture(LogLevel::Info, "{level} {msg}");
    logger.entry().info(&["hi".into()]);
    assert_eq!(memory.lines(), vec!["INFO hi"]);
}

#[test]
fn test_text_template_padding() {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .format("{level} {msg}|")
        .msg_min_len(5)
        .use_colors(false)
        .appender(memory.clone())
        .build()
        .unwrap();

    logger.entry().info(&["hi".into()]);
    assert_eq!(memory.lines(), vec!["INFO hi   |"]);
}

#[test]
fn test_text_full_line() {
    let (logger, memory) = capture(LogLevel::Debug, "{time} [{level}] {msg} {fields}");
    let entry = logger
        .entry()
        .with(fields! { "user" => "alice", "attempt" => 2 });

    infof!(entry, "login %s", "failed");
    assert_eq!(
        memory.lines(),
        vec!["2025-01-08 10:30:45 [INFO] login failed user=alice attempt=2"]
    );
}

#[test]
fn test_json_output_shape() {
    let (logger, memory) = json_capture(true);
    logger.entry().with_field("x", 1).info(&["hi".into()]);

    let lines = memory.lines();
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(&lines[0]).expect("valid JSON");
    let obj = parsed.as_object().expect("JSON object");

    for key in ["level", "time", "path", "msg", "x"] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(obj.len(), 5);
    assert_eq!(obj["x"], 1);
    assert_eq!(obj["msg"], "hi");
    assert_eq!(obj["level"], "info");
    assert!(obj.get("fields").is_none());
}

#[test]
fn test_json_empty_fields() {
    let (logger, memory) = json_capture(true);
    logger.entry().warn(&["w".into()]);

    let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 4);
    assert_eq!(parsed["level"], "warn");
}

#[test]
fn test_json_structured_field() {
    let (logger, memory) = json_capture(true);
    logger
        .entry()
        .with_field("request", serde_json::json!({ "id": 7, "tags": ["a"] }))
        .info(&["nested".into()]);

    let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
    assert_eq!(parsed["request"]["id"], 7);
    assert_eq!(parsed["request"]["tags"][0], "a");
}

#[test]
fn test_field_merge_last_write_wins() {
    let (logger, memory) = capture(LogLevel::Info, "{fields}");
    let entry = logger
        .entry()
        .with(fields! { "a" => 1 })
        .with(fields! { "a" => 2, "b" => 3 });

    entry.info(&[]);
    assert_eq!(memory.lines(), vec!["a=2 b=3"]);
}

#[test]
fn test_call_site_is_caller_line() {
    let (logger, memory) = capture(LogLevel::Info, "{path}");
    let entry = logger.entry();

    let line = line!() + 1;
    entry.info(&["here".into()]);

    assert_eq!(memory.lines(), vec![format!("integration_tests.rs:{}", line)]);
}

#[test]
fn test_call_site_full_path() {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .format("{path}")
        .full_path(true)
        .appender(memory.clone())
        .build()
        .unwrap();

    let line = line!() + 1;
    logger.entry().info(&[]);

    assert_eq!(memory.lines(), vec![format!("{}:{}", file!(), line)]);
}

#[test]
fn test_call_site_fixture_file() {
    let (logger, memory) = capture(LogLevel::Info, "{path} {msg}");
    let entry = logger.entry();

    let direct = fixture::log_info(&entry);
    let via_macro = fixture::log_info_macro(&entry);

    assert_eq!(
        memory.lines(),
        vec![
            format!("mod.rs:{} from fixture", direct),
            format!("mod.rs:{} from fixture macro", via_macro),
        ]
    );
}

#[test]
fn test_call_site_through_tracked_wrapper() {
    let (logger, memory) = capture(LogLevel::Info, "{path}");

    let line = line!() + 1;
    fixture::tracked_wrapper(&logger.entry());

    assert_eq!(memory.lines(), vec![format!("integration_tests.rs:{}", line)]);
}

#[test]
fn test_call_site_json_path() {
    let (logger, memory) = json_capture(false);

    let line = line!() + 1;
    logger.entry().error(&["e".into()]);

    let parsed: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
    assert_eq!(parsed["path"], format!("integration_tests.rs:{}", line));
}

#[test]
fn test_unresolved_call_site_is_empty() {
    let memory = MemoryAppender::new();
    // The fixture lives under the anchor and is not a `_tests.rs` file
    let logger = Logger::builder()
        .format("[{path}]")
        .resolver(CallSiteResolver::with_anchor("tests/"))
        .appender(memory.clone())
        .build()
        .unwrap();

    fixture::log_info(&logger.entry());
    assert_eq!(memory.lines(), vec!["[]"]);
}

#[test]
fn test_test_files_attributed_inside_anchor() {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .format("{path}")
        .resolver(CallSiteResolver::with_anchor("tests/"))
        .appender(memory.clone())
        .build()
        .unwrap();

    let line = line!() + 1;
    logger.entry().info(&[]);
    assert_eq!(memory.lines(), vec![format!("integration_tests.rs:{}", line)]);
}

#[test]
fn test_fatal_writes_one_line_then_terminates() {
    let (logger, memory) = capture(LogLevel::Info, "{level} {msg}");
    let entry = logger.entry();

    let result = catch_unwind(AssertUnwindSafe(|| {
        entry.fatalf("disk %s", &["full".into()]);
    }));

    let payload = result.expect_err("fatal must terminate");
    assert_eq!(payload.downcast_ref::<i32>(), Some(&1));
    assert_eq!(memory.lines(), vec!["FATAL disk full"]);
}

#[test]
fn test_fatal_exits_process_with_status_one() {
    if std::env::var_os("FLOG_FATAL_CHILD").is_some() {
        let logger = Logger::builder()
            .format("{level} {msg}")
            .use_colors(false)
            .build()
            .unwrap();
        logger.entry().fatal(&["child going down".into()]);
        unreachable!("fatal returned");
    }

    let exe = std::env::current_exe().expect("test binary path");
    let output = std::process::Command::new(exe)
        .args(["test_fatal_exits_process_with_status_one", "--exact", "--nocapture"])
        .env("FLOG_FATAL_CHILD", "1")
        .output()
        .expect("spawn child");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // The harness prints its own `test ... ` prefix on the same line
    assert_eq!(stdout.matches("FATAL child going down").count(), 1);
    let line = stdout
        .lines()
        .find(|l| l.contains("child going down"))
        .expect("fatal line written");
    assert!(line.ends_with("FATAL child going down"), "line: {:?}", line);
}

#[test]
fn test_panic_error_equals_written_line() {
    let (logger, memory) = capture(LogLevel::Info, "{time} {level} {msg}");

    let err = logger
        .entry()
        .panicf("invariant %s broken", &["x".into()])
        .unwrap_err();

    let lines = memory.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(err.to_string(), lines[0]);
    assert_eq!(lines[0], "2025-01-08 10:30:45 PANIC invariant x broken");
    assert!(matches!(err, LoggerError::Panic { .. }));
}

#[test]
fn test_panic_propagates_with_question_mark() {
    let (logger, memory) = capture(LogLevel::Info, "{msg}");

    fn run(entry: &Entry<'_>) -> flog::Result<u32> {
        entry.panic(&["stop".into()])?;
        Ok(1)
    }

    let result = run(&logger.entry());
    assert!(matches!(result, Err(LoggerError::Panic { ref line }) if line == "stop"));
    assert_eq!(memory.len(), 1);
}

#[test]
fn test_bad_verbs_never_fail() {
    let (logger, memory) = capture(LogLevel::Info, "{msg}");
    let entry = logger.entry();

    errorf!(entry, "%d and %s", "text");
    assert_eq!(memory.lines(), vec!["%!d(string=text) and %!s(MISSING)"]);
}

#[test]
fn test_concurrent_logging() {
    let memory = MemoryAppender::new();
    let logger = Arc::new(
        Logger::builder()
            .format("{msg} {fields}")
            .use_colors(false)
            .appender(memory.clone())
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let entry = logger.entry().with_field("thread", t);
                for i in 0..50 {
                    infof!(entry, "message %d", i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), 400);
    for t in 0..8 {
        let count = lines
            .iter()
            .filter(|l| l.ends_with(&format!("thread={}", t)))
            .count();
        assert_eq!(count, 50);
    }
}

#[test]
fn test_config_driven_logger() {
    let config = LoggerConfig::from_json_str(
        r#"{"LogLevel": "warn", "Format": "{level}:{msg}", "UseColors": false}"#,
    )
    .expect("valid config");

    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .config(config)
        .appender(memory.clone())
        .build()
        .unwrap();

    let entry = logger.entry();
    entry.info(&["skipped".into()]);
    entry.warn(&["kept".into()]);
    assert_eq!(memory.lines(), vec!["WARN:kept"]);
}
