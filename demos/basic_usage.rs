//! Demo: Basic Usage
//!
//! This demo walks through the store operations and the shell renderers.
//!
//! Run with: cargo run --example basic_usage

use tasknotes::{Store, render_notes, render_tasks};

fn main() {
    let mut store = Store::new();

    println!("TaskNotes Basic Usage");
    println!("=====================\n");

    // Tasks
    println!("1. Adding tasks...");
    store.add_task_with_tags("Write report", vec!["work".to_string(), "urgent".to_string()]);
    store.add_task_with_tags("Buy groceries", vec!["personal".to_string()]);
    store.add_task_with_tags("Review PR", vec!["work".to_string()]);
    let added = store.add_task("Write report");
    println!("   Adding \"Write report\" again succeeded: {}\n", added);

    println!("2. Completing a task...");
    store.complete_task("Review PR");
    println!("{}\n", render_tasks(store.get_tasks(), "No tasks available."));

    println!("3. Tasks tagged \"work\":");
    for task in store.get_tasks_by_tag("work") {
        println!("   - {} ({})", task.title, task.status_label());
    }
    println!();

    println!("4. Incomplete tasks:");
    println!("{}\n", render_tasks(store.get_incomplete_tasks(), "No tasks available."));

    // Notes
    println!("5. Notes...");
    store.add_note("Call the bank");
    store.add_note("Call the bank");
    store.add_note("Pick up parcel");
    println!("{}\n", render_notes(store.get_notes(), "No notes available."));

    println!("6. Removing duplicate note...");
    store.remove_note("Call the bank");
    println!("{}\n", render_notes(store.get_notes(), "No notes available."));

    println!("Demo complete!");
}
