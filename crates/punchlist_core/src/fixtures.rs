//! Deterministic demo task collection.
//!
//! Seeds the CLI probe and tests with the same small data set the task table
//! demo renders.

use crate::model::task::{Tag, Task, TaskId, TaskPriority, TaskStatus, TaskType};

const SEED_EPOCH_MS: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z
const HOUR_MS: i64 = 60 * 60 * 1000;

/// Returns the demo tasks `task-1` through `task-4`.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        seed(
            "task-1",
            "Replace lobby light fixtures",
            TaskStatus::Open,
            TaskType::PunchItem,
            TaskPriority::Urgent,
            |task| {
                task.due_date = Some("2024-01-15".to_string());
                task.tags = vec![Tag::new("tag-electrical", "Electrical", "#2b6cb0")];
                task.assigned_to_id = Some("user-1".to_string());
                task.assigned_to_name = Some("Dana Reyes".to_string());
                task.assigned_to_initials = Some("DR".to_string());
                task.project_name = Some("Harbor Point Renovation".to_string());
                task.project_id = Some("project-1".to_string());
                task.area_name = Some("Lobby".to_string());
                task.number = Some("T-0001".to_string());
                task.photo_count = 3;
                task.featured_photo_url = Some("https://cdn.example.com/p/1.jpg".to_string());
            },
        ),
        seed(
            "task-2",
            "Inspect rooftop HVAC unit",
            TaskStatus::InProgress,
            TaskType::ScheduledTask,
            TaskPriority::Normal,
            |task| {
                task.started_at = Some(SEED_EPOCH_MS + 2 * HOUR_MS);
                task.coordinator_id = Some("user-2".to_string());
                task.coordinator_name = Some("Sam Okafor".to_string());
                task.coordinator_initials = Some("SO".to_string());
                task.work_order_id = Some("wo-17".to_string());
                task.work_order_number = Some("WO-1017".to_string());
                task.updates_count = 2;
                task.last_comment_created_at = Some(SEED_EPOCH_MS + 3 * HOUR_MS);
                task.number = Some("T-0002".to_string());
            },
        ),
        seed(
            "task-3",
            "Patch drywall in unit 4B",
            TaskStatus::InReview,
            TaskType::WarrantyItem,
            TaskPriority::Normal,
            |task| {
                task.tags = vec![
                    Tag::new("tag-drywall", "Drywall", "#975a16"),
                    Tag::new("tag-warranty", "Warranty", "#6b46c1"),
                ];
                task.area_name = Some("Unit 4B".to_string());
                task.number = Some("T-0003".to_string());
            },
        ),
        seed(
            "task-4",
            "Order replacement keys",
            TaskStatus::Completed,
            TaskType::Todo,
            TaskPriority::Normal,
            |task| {
                task.started_at = Some(SEED_EPOCH_MS + HOUR_MS);
                task.ended_at = Some(SEED_EPOCH_MS + 5 * HOUR_MS);
            },
        ),
    ]
}

fn seed(
    id: &str,
    title: &str,
    status: TaskStatus,
    task_type: TaskType,
    priority: TaskPriority,
    customize: impl FnOnce(&mut Task),
) -> Task {
    let mut task = Task {
        id: TaskId::from(id),
        title: title.to_string(),
        status,
        task_type,
        priority,
        due_date: None,
        started_at: None,
        ended_at: None,
        created_at: SEED_EPOCH_MS,
        updated_at: SEED_EPOCH_MS,
        photo_count: 0,
        featured_photo_url: None,
        tags: Vec::new(),
        updates_count: 0,
        last_comment_created_at: None,
        coordinator_id: None,
        coordinator_name: None,
        coordinator_initials: None,
        assigned_to_id: None,
        assigned_to_name: None,
        assigned_to_initials: None,
        project_id: None,
        project_name: None,
        work_order_id: None,
        work_order_number: None,
        area_name: None,
        number: None,
    };
    customize(&mut task);
    task
}
