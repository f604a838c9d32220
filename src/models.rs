// Data models for TaskNotes

use serde::{Deserialize, Serialize};

/// A titled to-do item with optional tags and a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique key within a store
    pub title: String,
    /// Labels used for filtering, kept in the order given
    pub tags: Vec<String>,
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tags,
            completed: false,
        }
    }

    /// Whether the tag list contains `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Human-readable completion state used by the shell
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Incomplete" }
    }
}

/// Free-text note; identity is its content
pub type Note = String;
