// tests/draft_creation_test.rs

use chrono::{DateTime, FixedOffset, TimeZone};
use tempfile::tempdir;

use blogkit::draft::create_draft;
use blogkit::error::DraftError;

fn invocation_time() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 15, 18, 4, 59)
        .unwrap()
}

#[test]
fn test_hello_world_draft() {
    let dir = tempdir().unwrap();
    let now = invocation_time();

    let path = create_draft(dir.path(), "Hello World", &now).unwrap();
    assert!(path.to_string_lossy().ends_with("2024-01-15-hello-world.md"));
    assert_eq!(path.parent().unwrap(), dir.path());

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.first(), Some(&"---"));
    assert!(lines.contains(&"layout: post"));
    assert!(lines.contains(&"title:  \"Hello World\""));
    assert!(lines.contains(&"date: 2024-01-15 18:04:59 -0500"));
    assert!(lines.contains(&"categories: "));
    assert_eq!(lines.last(), Some(&"---"));
}

#[test]
fn test_second_draft_with_same_title_fails_and_keeps_first() {
    let dir = tempdir().unwrap();
    let now = invocation_time();

    let path = create_draft(dir.path(), "Hello World", &now).unwrap();
    std::fs::write(&path, "edited by hand").unwrap();

    let later = now + chrono::Duration::minutes(3);
    match create_draft(dir.path(), "  hello   WORLD ", &later) {
        Err(DraftError::AlreadyExists(existing)) => assert_eq!(existing, path),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "edited by hand");
}

#[test]
fn test_error_message_names_the_path() {
    let dir = tempdir().unwrap();
    let now = invocation_time();
    create_draft(dir.path(), "Twice", &now).unwrap();

    let err = create_draft(dir.path(), "Twice", &now).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2024-01-15-twice.md"));
    assert!(message.ends_with("already exists!"));
}
