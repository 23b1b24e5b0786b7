use punchlist_core::fixtures::sample_tasks;
use punchlist_core::{Task, TaskStore};

fn sorted(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| a.id.cmp(&b.id));
    tasks
}

#[test]
fn get_returns_last_put_record_and_none_for_unknown_ids() {
    let mut store = TaskStore::from_tasks(sample_tasks());

    let mut replacement = store.get("task-2").unwrap().clone();
    replacement.title = "Inspect both HVAC units".to_string();
    store.put(replacement.clone());

    assert_eq!(store.get("task-2"), Some(&replacement));
    assert!(store.get("non existent ID").is_none());
}

#[test]
fn get_all_counts_distinct_ids_only() {
    let mut store = TaskStore::new();
    assert!(store.is_empty());
    assert!(store.get_all().is_empty());

    store.put(Task::with_id("t1", "A").unwrap());
    store.put(Task::with_id("t2", "B").unwrap());
    store.put(Task::with_id("t1", "A2").unwrap());

    assert_eq!(store.len(), 2);
    assert_eq!(store.get_all().len(), 2);
    assert!(store.contains("t1"));
    assert_eq!(store.get("t1").unwrap().title, "A2");
}

#[test]
fn get_all_matches_seed_regardless_of_order() {
    let store = TaskStore::from_tasks(sample_tasks());
    assert_eq!(sorted(store.get_all()), sorted(sample_tasks()));
}
