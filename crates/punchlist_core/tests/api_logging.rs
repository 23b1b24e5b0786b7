//! The logger is process-global, so these checks live in their own test binary.

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use punchlist_core::fixtures::sample_tasks;
use punchlist_core::{ApiError, FixedNetworkPolicy, MockApi, TaskPatch};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

static INSTALLED: Lazy<()> = Lazy::new(|| {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);
});

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *LOGGER.lines.lock().unwrap())
}

#[tokio::test(start_paused = true)]
async fn update_logs_ok_event_only_after_success() {
    Lazy::force(&INSTALLED);
    let api = MockApi::with_policy(
        sample_tasks(),
        Arc::new(FixedNetworkPolicy::succeeding(Duration::from_millis(300))),
    );

    take_lines();
    api.update_task("task-1", &TaskPatch::default().with_title("x"))
        .await
        .unwrap();
    let lines = take_lines();
    assert!(
        lines.iter().any(|line| line
            == r#"event=task_update module=api status=ok task_id=task-1 payload={"title":"x"}"#),
        "captured: {lines:?}"
    );

    let err = api
        .update_task("task-1", &TaskPatch::default().with_title("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    let lines = take_lines();
    assert!(
        lines.iter().all(|line| !line.contains("status=ok")),
        "captured: {lines:?}"
    );
}
