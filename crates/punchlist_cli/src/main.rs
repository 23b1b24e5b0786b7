//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `punchlist_core` wiring.
//! - Seed the demo tasks, run one batch status update and print the outcome.
//!
//! Usage: `punchlist_cli [network-config.json]`

use log::warn;
use punchlist_core::fixtures::sample_tasks;
use punchlist_core::{
    default_log_level, init_logging, initialize_mock_api_with, mock_api, ApiError,
    NetworkConfig, RandomNetworkPolicy, Task, TaskPatch, TaskStatus,
};
use std::process::ExitCode;
use std::sync::Arc;

const MAX_ATTEMPTS: u32 = 3;
const BATCH_IDS: [&str; 2] = ["task-1", "task-2"];

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = init_logging(default_log_level(), None) {
        eprintln!("logging disabled: {err}");
    }

    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let policy = match RandomNetworkPolicy::new(config) {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    initialize_mock_api_with(sample_tasks(), Arc::new(policy));
    println!("punchlist_core version={}", punchlist_core::core_version());

    match run_batch().await {
        Ok(updated) => {
            for task in &updated {
                print_task(task);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            for message in err.messages() {
                eprintln!("error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<String>) -> Result<NetworkConfig, String> {
    let Some(path) = path else {
        return Ok(NetworkConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|err| format!("failed to read config `{path}`: {err}"))?;
    NetworkConfig::from_json(&text).map_err(|err| err.to_string())
}

async fn run_batch() -> Result<Vec<Task>, ApiError> {
    let api = mock_api()?;

    let mut listed = api.get_all_tasks();
    listed.sort_by(|a, b| a.id.cmp(&b.id));
    println!("loaded {} task(s)", listed.len());
    for task in &listed {
        print_task(task);
    }

    let patch = TaskPatch::default().with_status(TaskStatus::Completed);
    let mut attempt = 1;
    loop {
        match api.update_tasks_batch(&BATCH_IDS, &patch).await {
            Err(err) if err.is_transient() && attempt < MAX_ATTEMPTS => {
                warn!("event=cli_retry module=cli status=error attempt={attempt} error={err}");
                attempt += 1;
            }
            result => return result,
        }
    }
}

fn print_task(task: &Task) {
    println!(
        "{:<8} {:<11} {:<32} updated_at={}",
        task.id,
        format!("{:?}", task.status),
        task.title,
        task.updated_at
    );
}
