//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal consumer of `taskflow_core` acting as the view layer:
//!   open a workspace, subscribe to the bus, run the fetch+filter pipeline.
//! - Keep output deterministic enough for quick local sanity checks.

use std::process::ExitCode;

use taskflow_core::filter::{due_today, important, status_counts};
use taskflow_core::{open_db_in_memory, Latency, StoreError, TaskDraft, Workspace};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskflow: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StoreError> {
    let conn = open_db_in_memory()?;
    let mut workspace = Workspace::open(&conn, Latency::none())?;

    let subscription = workspace.bus().subscribe(|| println!("(data changed)"));

    println!("taskflow_core version={}", taskflow_core::core_version());

    let draft = TaskDraft::titled("Try out taskflow");
    if let Err(err) = draft.validate() {
        eprintln!("taskflow: rejected draft: {err}");
    } else {
        let created = workspace.create_task(draft)?;
        println!("created: #{} {}", created.id, created.title);
    }

    for list in workspace.get_lists() {
        println!("list #{} {} ({} open)", list.id, list.name, list.task_count);
    }

    let tasks = workspace.get_tasks();
    let counts = status_counts(&tasks);
    println!(
        "tasks: {} total, {} active, {} completed",
        counts.all, counts.active, counts.completed
    );
    for task in important(&tasks) {
        println!("important: #{} {}", task.id, task.title);
    }
    for task in due_today(&tasks) {
        println!("today: #{} {}", task.id, task.title);
    }

    workspace.bus().unsubscribe(subscription);
    Ok(())
}
