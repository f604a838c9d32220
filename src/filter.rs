// Task filtering for store queries

use crate::models::Task;

/// Predicate over tasks used by the store's filtered views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Incomplete,
    /// Tag list contains this exact string
    Tag(String),
}

impl TaskFilter {
    pub fn tag(tag: impl Into<String>) -> Self {
        TaskFilter::Tag(tag.into())
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Incomplete => !task.completed,
            TaskFilter::Tag(tag) => task.has_tag(tag),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Completed => write!(f, "completed"),
            TaskFilter::Incomplete => write!(f, "incomplete"),
            TaskFilter::Tag(tag) => write!(f, "tag={}", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, tags: &[&str], completed: bool) -> Task {
        Task {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            completed,
        }
    }

    #[test]
    fn test_filter_matches() {
        let done = task("Done", &["work"], true);
        let open = task("Open", &["personal"], false);

        assert!(TaskFilter::All.matches(&done));
        assert!(TaskFilter::All.matches(&open));
        assert!(TaskFilter::Completed.matches(&done));
        assert!(!TaskFilter::Completed.matches(&open));
        assert!(TaskFilter::Incomplete.matches(&open));
        assert!(!TaskFilter::Incomplete.matches(&done));
        assert!(TaskFilter::tag("work").matches(&done));
        assert!(!TaskFilter::tag("work").matches(&open));
    }

    #[test]
    fn test_tag_filter_on_untagged_task() {
        let untagged = task("Bare", &[], false);
        assert!(!TaskFilter::tag("").matches(&untagged));
        assert!(!TaskFilter::tag("work").matches(&untagged));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(TaskFilter::All.to_string(), "all");
        assert_eq!(TaskFilter::Completed.to_string(), "completed");
        assert_eq!(TaskFilter::Incomplete.to_string(), "incomplete");
        assert_eq!(TaskFilter::tag("work").to_string(), "tag=work");
    }
}
