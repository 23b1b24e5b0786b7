use punchlist_core::fixtures::sample_tasks;
use punchlist_core::{Tag, Task, TaskError, TaskPatch, TaskPriority, TaskStatus, TaskType};

#[test]
fn task_serialization_uses_camel_case_wire_fields() {
    let mut task = Task::with_id("task-9", "Seal window").unwrap();
    task.status = TaskStatus::InReview;
    task.task_type = TaskType::WarrantyItem;
    task.priority = TaskPriority::Urgent;
    task.due_date = Some("2024-02-01".to_string());
    task.assigned_to_initials = Some("DR".to_string());
    task.tags = vec![Tag::new("tag-1", "Glass", "#fff")];

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "task-9");
    assert_eq!(json["status"], "InReview");
    assert_eq!(json["taskType"], "WarrantyItem");
    assert_eq!(json["priority"], "Urgent");
    assert_eq!(json["dueDate"], "2024-02-01");
    assert_eq!(json["assignedToInitials"], "DR");
    assert_eq!(json["tags"][0]["backgroundColor"], "#fff");
    assert!(json["workOrderNumber"].is_null());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn with_id_rejects_empty_identifier() {
    assert_eq!(Task::with_id("", "x").unwrap_err(), TaskError::EmptyId);
}

#[test]
fn new_tasks_get_distinct_generated_ids() {
    let first = Task::new("a");
    let second = Task::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn patch_decodes_partial_ui_payload() {
    let patch: TaskPatch = serde_json::from_str(
        r#"{"title":"Renamed","status":"Completed","dueDate":null,"photoCount":4}"#,
    )
    .unwrap();

    assert_eq!(patch.title.as_deref(), Some("Renamed"));
    assert_eq!(patch.status, Some(TaskStatus::Completed));
    assert_eq!(patch.due_date, Some(None));
    assert_eq!(patch.photo_count, Some(4));
    assert_eq!(patch.priority, None);
}

#[test]
fn patch_apply_keeps_identity_and_untouched_fields() {
    let base = sample_tasks().remove(0);
    let patch = TaskPatch {
        due_date: Some(None),
        ..TaskPatch::default()
    }
    .with_title("Replace all fixtures")
    .with_assignee(Some((
        "user-7".to_string(),
        "Lee Park".to_string(),
        "LP".to_string(),
    )));

    let merged = patch.apply(&base, base.updated_at + 1);
    assert_eq!(merged.id, base.id);
    assert_eq!(merged.title, "Replace all fixtures");
    assert_eq!(merged.due_date, None);
    assert_eq!(merged.assigned_to_name.as_deref(), Some("Lee Park"));
    assert_eq!(merged.tags, base.tags);
    assert_eq!(merged.project_name, base.project_name);
    assert_eq!(merged.updated_at, base.updated_at + 1);
}

#[test]
fn sample_tasks_have_unique_ids() {
    let tasks = sample_tasks();
    let mut ids = tasks.iter().map(|task| task.id.clone()).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), tasks.len());
    assert!(tasks.iter().any(Task::is_closed));
}
