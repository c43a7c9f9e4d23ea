use super::*;
use crate::test_support::task;

#[test]
fn parse_task_id_accepts_positive_numbers() {
    assert_eq!(parse_task_id(Some("42")), Some(42));
    assert_eq!(parse_task_id(Some(" 7 ")), Some(7));
}

#[test]
fn parse_task_id_rejects_garbage() {
    assert_eq!(parse_task_id(None), None);
    assert_eq!(parse_task_id(Some("abc")), None);
    assert_eq!(parse_task_id(Some("0")), None);
    assert_eq!(parse_task_id(Some("-3")), None);
}

#[test]
fn progress_save_label_tracks_request() {
    assert_eq!(progress_save_label(false), "Save Progress");
    assert_eq!(progress_save_label(true), "Saving...");
}

#[test]
fn progress_control_only_for_in_progress_tasks() {
    assert!(shows_progress_control(&task(1, TaskStatus::InProgress, 40)));
    assert!(!shows_progress_control(&task(2, TaskStatus::ToDo, 0)));
    assert!(!shows_progress_control(&task(3, TaskStatus::Done, 100)));
}
