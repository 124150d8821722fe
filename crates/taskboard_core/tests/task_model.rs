use taskboard_core::{normalize_title, Status, Task, TaskValidationError};

#[test]
fn task_new_defaults_to_todo() {
    let task = Task::new(7, "water the ferns");

    assert_eq!(task.id, 7);
    assert_eq!(task.title, "water the ferns");
    assert_eq!(task.status, Status::Todo);
}

#[test]
fn status_labels_round_trip() {
    for status in Status::ALL {
        assert_eq!(Status::parse_label(status.label()), Some(status));
    }
    assert_eq!(Status::parse_label("Done"), None);
    assert_eq!(Status::parse_label("to do"), None);
}

#[test]
fn status_order_is_todo_in_progress_completed() {
    assert_eq!(
        Status::ALL,
        [Status::Todo, Status::InProgress, Status::Completed]
    );

    assert_eq!(Status::Todo.next(), Some(Status::InProgress));
    assert_eq!(Status::InProgress.next(), Some(Status::Completed));
    assert_eq!(Status::Completed.next(), None);

    assert_eq!(Status::Todo.previous(), None);
    assert_eq!(Status::InProgress.previous(), Some(Status::Todo));
    assert_eq!(Status::Completed.previous(), Some(Status::InProgress));
}

#[test]
fn validate_rejects_blank_titles() {
    let mut task = Task::new(1, "ok");
    assert!(task.validate().is_ok());

    task.title = "   ".to_string();
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyTitle));
}

#[test]
fn normalize_title_trims_and_rejects_empty_input() {
    assert_eq!(
        normalize_title("  buy stamps  ").expect("padded title should normalize"),
        "buy stamps"
    );
    assert_eq!(normalize_title(""), Err(TaskValidationError::EmptyTitle));
    assert_eq!(normalize_title(" \t\n"), Err(TaskValidationError::EmptyTitle));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(3, "ship the release");
    task.status = Status::InProgress;

    let json = serde_json::to_value(&task).expect("task should serialize");
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "ship the release");
    assert_eq!(json["status"], "in_progress");

    let parsed: Task = serde_json::from_value(json).expect("task should deserialize");
    assert_eq!(parsed, task);
}
