// Rust guideline compliant 2026-10-19

//! Integration tests for the JSONL issue store.

use board_core::{Error, IssueInput, IssueStore, JsonlIssueStore, Priority, Status};
use std::fs;
use tempfile::TempDir;

fn store_in(temp_dir: &TempDir) -> JsonlIssueStore {
    JsonlIssueStore::new(temp_dir.path().join("issues.jsonl")).expect("Failed to create store")
}

fn input(title: &str) -> IssueInput {
    let mut input = IssueInput::new(title, "Steps to reproduce the problem", "dev@example.com");
    input.priority = Priority::High;
    input.assigned_to = Some("owner@team.com".to_string());
    input
}

#[test]
fn test_missing_file_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    assert!(store.list_recent(None).unwrap().is_empty());
    assert!(matches!(store.get("iss-abc123"), Err(Error::NotFound(_))));
}

#[test]
fn test_empty_path_rejected() {
    assert!(JsonlIssueStore::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_create_appends_open_issue() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let id = store.create(input("Crash on save")).unwrap();
    let issue = store.get(&id).unwrap();

    assert!(id.starts_with("iss-"));
    assert_eq!(issue.title, "Crash on save");
    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.priority, Priority::High);
    assert_eq!(issue.assigned_to.as_deref(), Some("owner@team.com"));
    assert_eq!(issue.created_by, "dev@example.com");
    assert!(issue.created_at > 0);

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("\"status\":\"Open\""));
}

#[test]
fn test_create_validates_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let result = store.create(IssueInput::new("Title", "   ", "dev@example.com"));
    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(!store.path().exists());
}

#[test]
fn test_ids_are_unique_for_identical_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let first = store.create(input("Same title")).unwrap();
    let second = store.create(input("Same title")).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_list_recent_newest_first_with_limit() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let a = store.create(input("First")).unwrap();
    let b = store.create(input("Second")).unwrap();
    let c = store.create(input("Third")).unwrap();

    let all: Vec<String> = store
        .list_recent(None)
        .unwrap()
        .into_iter()
        .map(|issue| issue.id)
        .collect();
    assert_eq!(all, vec![c.clone(), b, a]);

    let limited = store.list_recent(Some(1)).unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, c);
}

#[test]
fn test_update_status_rewrites_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let keep = store.create(input("Untouched")).unwrap();
    let id = store.create(input("Moves along")).unwrap();
    store.update_status(&id, Status::InProgress).unwrap();

    assert_eq!(store.get(&id).unwrap().status, Status::InProgress);
    assert_eq!(store.get(&keep).unwrap().status, Status::Open);
    assert_eq!(store.stored_status(&id).unwrap(), Some(Status::InProgress));
    assert!(!store.path().with_extension("jsonl.tmp").exists());
}

#[test]
fn test_update_status_missing_issue() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.create(input("Present")).unwrap();

    assert!(matches!(
        store.update_status("iss-000000", Status::Done),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        store.stored_status("iss-000000"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_unknown_stored_status_is_reported_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    fs::write(
        store.path(),
        concat!(
            r#"{"id":"iss-aaaaaa","title":"Legacy","description":"Old record","priority":"Low","status":"Archived","created_by":"dev@example.com","created_at":5}"#,
            "\n"
        ),
    )
    .unwrap();

    assert_eq!(store.stored_status("iss-aaaaaa").unwrap(), None);
    assert!(store.list_recent(None).unwrap().is_empty());
    assert_eq!(store.ids().unwrap(), vec!["iss-aaaaaa".to_string()]);
}

#[test]
fn test_malformed_lines_are_skipped_and_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let id = store.create(input("Valid")).unwrap();

    let mut content = fs::read_to_string(store.path()).unwrap();
    content.push_str("{not json}\n");
    fs::write(store.path(), &content).unwrap();

    assert_eq!(store.list_recent(None).unwrap().len(), 1);

    store.update_status(&id, Status::InProgress).unwrap();
    let rewritten = fs::read_to_string(store.path()).unwrap();
    assert!(rewritten.contains("{not json}"));
}

#[test]
fn test_lock_file_released_after_write() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.create(input("One")).unwrap();
    let value = store.with_lock(|| Ok(7)).unwrap();
    assert_eq!(value, 7);
}
