// TaskNotes - In-memory task and note manager

pub mod config;
pub mod filter;
pub mod models;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use filter::TaskFilter;
pub use models::{Note, Task};
pub use shell::{Command, Shell, parse_tags, render_notes, render_tasks};
pub use store::{SharedStore, Store};
