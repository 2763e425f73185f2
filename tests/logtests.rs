use std::fs;

use ArrayQueueMini::Error;
use ArrayQueueMini::core::buildcore::{LogEntry, LoggedQueue, Op, Outcome, QueueConfig};

#[test]
fn test_every_operation_is_logged() {
    let mut queue = LoggedQueue::with_capacity(1);
    queue.add("a".to_string());
    queue.add("b".to_string());
    assert_eq!(queue.delete(), Some("a".to_string()));
    assert_eq!(queue.delete(), Some("b".to_string()));
    assert_eq!(queue.delete(), None);

    let logs = queue.logs();
    assert_eq!(logs.len(), 5);
    assert_eq!(logs.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    assert_eq!(logs[1].op, Op::Add);
    assert_eq!(logs[1].outcome, Outcome::Stored);
    assert_eq!(logs[1].capacity_after, 2);
    assert_eq!(logs[1].len_after, 2);

    assert_eq!(logs[2].op, Op::Delete);
    assert_eq!(logs[2].item.as_deref(), Some("a"));
    assert_eq!(logs[2].outcome, Outcome::Removed);

    assert_eq!(logs[4].outcome, Outcome::Empty);
    assert_eq!(logs[4].item, None);
    assert_eq!(logs[4].len_after, 0);
}

#[test]
fn test_export_appends_ndjson() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.ndjson");

    let mut queue = LoggedQueue::new();
    queue.add(7u32);
    queue.delete();
    queue.export_logs(&path).unwrap();
    queue.export_logs(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let entries: Vec<LogEntry<u32>> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], queue.logs()[0]);
    assert_eq!(entries[3], queue.logs()[1]);
}

#[test]
fn test_log_entry_display() {
    let mut queue = LoggedQueue::<i32>::new();
    queue.delete();
    let line = queue.logs()[0].to_string();
    assert_eq!(line, "#1 Delete None -> Empty (len 0, capacity 8)");
}

#[test]
fn test_config_defaults_and_partial_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("queue.json");
    fs::write(&path, r#"{ "initial_capacity": 2 }"#).unwrap();

    let config = QueueConfig::load(&path).unwrap();
    assert_eq!(config.initial_capacity, 2);
    assert_eq!(config.workers, QueueConfig::default().workers);
    assert_eq!(config.log_path, None);

    let queue = LoggedQueue::<i32>::from_config(&config).unwrap();
    assert_eq!(queue.capacity(), 2);
}

#[test]
fn test_config_rejects_zero_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("queue.json");
    fs::write(&path, r#"{ "initial_capacity": 0 }"#).unwrap();

    assert!(matches!(QueueConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_config_reports_io_and_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        QueueConfig::load(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));

    let path = dir.path().join("bad.json");
    fs::write(&path, "not json").unwrap();
    assert!(matches!(QueueConfig::load(&path), Err(Error::Json(_))));
}
