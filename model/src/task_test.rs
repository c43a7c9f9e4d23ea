use super::*;

fn task_json(status: &str, progress: i32) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Write report",
        "description": null,
        "status": status,
        "owner": "alice",
        "created_at": "2024-05-01T09:00:00",
        "completed_at": null,
        "progress": progress
    })
}

// =============================================================
// TaskStatus
// =============================================================

#[test]
fn status_serializes_to_display_labels() {
    assert_eq!(serde_json::to_value(TaskStatus::ToDo).unwrap(), "To Do");
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "In Progress");
    assert_eq!(serde_json::to_value(TaskStatus::Done).unwrap(), "Done");
}

#[test]
fn unknown_status_is_preserved() {
    let status: TaskStatus = serde_json::from_value(serde_json::json!("Blocked")).unwrap();
    assert_eq!(status, TaskStatus::Other("Blocked".to_owned()));
    assert_eq!(serde_json::to_value(&status).unwrap(), "Blocked");
}

#[test]
fn parse_loose_accepts_cli_spellings() {
    assert_eq!(TaskStatus::parse_loose("todo"), TaskStatus::ToDo);
    assert_eq!(TaskStatus::parse_loose("To Do"), TaskStatus::ToDo);
    assert_eq!(TaskStatus::parse_loose("in-progress"), TaskStatus::InProgress);
    assert_eq!(TaskStatus::parse_loose("IN_PROGRESS"), TaskStatus::InProgress);
    assert_eq!(TaskStatus::parse_loose(" Done "), TaskStatus::Done);
    assert_eq!(TaskStatus::parse_loose("review"), TaskStatus::Other("review".to_owned()));
}

// =============================================================
// Task
// =============================================================

#[test]
fn task_decodes_service_payload() {
    let task: Task = serde_json::from_value(task_json("In Progress", 40)).unwrap();
    assert_eq!(task.id, 7);
    assert_eq!(task.owner, "alice");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(task.description.is_none());
    assert!(task.completed_at.is_none());
    assert_eq!(task.display_progress(), 40);
}

#[test]
fn done_task_displays_full_progress() {
    let task: Task = serde_json::from_value(task_json("Done", 10)).unwrap();
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.display_progress(), 100);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(effective_progress(-5, &TaskStatus::ToDo), 0);
    assert_eq!(effective_progress(250, &TaskStatus::InProgress), 100);
}

#[test]
fn task_rejects_bad_created_at() {
    let mut value = task_json("To Do", 0);
    value["created_at"] = serde_json::json!("not a date");
    assert!(serde_json::from_value::<Task>(value).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_task_omits_empty_optionals() {
    let body = serde_json::to_value(NewTask { title: "Plan".into(), description: None, status: TaskStatus::ToDo, owner: None }).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "Plan", "status": "To Do" }));
}

#[test]
fn progress_update_forces_in_progress() {
    let body = serde_json::to_value(TaskUpdate::progress(55)).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "In Progress", "progress": 55 }));
}

#[test]
fn progress_update_caps_at_hundred() {
    assert_eq!(TaskUpdate::progress(180).progress, Some(100));
}

#[test]
fn empty_update_serializes_to_empty_object() {
    assert_eq!(serde_json::to_value(TaskUpdate::default()).unwrap(), serde_json::json!({}));
}
