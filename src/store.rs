// In-memory store for tasks and notes

use crate::filter::TaskFilter;
use crate::models::{Note, Task};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// In-memory owner of all task and note records
///
/// Both sequences keep insertion order, and every query returns records in that
/// order. Task titles are unique; the check happens at insertion only.
///
/// Nothing here is synchronized. Share a store between threads through
/// [`SharedStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    tasks: Vec<Task>,
    notes: Vec<Note>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// True when the store holds neither tasks nor notes
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.notes.is_empty()
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// Add an untagged task
    ///
    /// Returns false, leaving the store untouched, when `title` is empty or
    /// already taken.
    pub fn add_task(&mut self, title: &str) -> bool {
        self.add_task_with_tags(title, Vec::new())
    }

    /// Add a task with tags
    ///
    /// Tags are stored as given: no trimming, no deduplication.
    pub fn add_task_with_tags(&mut self, title: &str, tags: Vec<String>) -> bool {
        if title.is_empty() {
            debug!("add_task: rejected empty title");
            return false;
        }
        if self.find_task(title).is_some() {
            debug!(title, "add_task: rejected duplicate title");
            return false;
        }

        debug!(title, tag_count = tags.len(), "add_task: appending");
        self.tasks.push(Task::new(title, tags));
        true
    }

    /// Remove every task titled `title`; no-op when there is none
    pub fn remove_task(&mut self, title: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.title != title);
        debug!(title, removed = before - self.tasks.len(), "remove_task");
    }

    /// Mark the first task titled `title` as completed
    ///
    /// Returns false when no such task exists.
    pub fn complete_task(&mut self, title: &str) -> bool {
        self.set_completed(title, true)
    }

    /// Mark the first task titled `title` as not completed
    pub fn incomplete_task(&mut self, title: &str) -> bool {
        self.set_completed(title, false)
    }

    fn set_completed(&mut self, title: &str, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|t| t.title == title) {
            Some(task) => {
                task.completed = completed;
                debug!(title, completed, "set_completed: updated");
                true
            }
            None => {
                debug!(title, completed, "set_completed: task not found");
                false
            }
        }
    }

    /// First task titled `title`
    pub fn find_task(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }

    /// All tasks in insertion order
    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mutable view over all tasks
    ///
    /// Edits land directly in the store. Renaming a task here bypasses the
    /// title uniqueness check, which only runs in [`Store::add_task`].
    pub fn get_tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    pub fn get_completed_tasks(&self) -> Vec<&Task> {
        self.list_tasks(&TaskFilter::Completed)
    }

    pub fn get_incomplete_tasks(&self) -> Vec<&Task> {
        self.list_tasks(&TaskFilter::Incomplete)
    }

    /// Tasks whose tag list contains `tag` exactly
    pub fn get_tasks_by_tag(&self, tag: &str) -> Vec<&Task> {
        self.list_tasks(&TaskFilter::tag(tag))
    }

    /// Tasks matching `filter`, in insertion order
    pub fn list_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    // ========================================================================
    // Notes
    // ========================================================================

    /// Append a note; empty text is rejected
    ///
    /// Duplicate content is allowed.
    pub fn add_note(&mut self, text: &str) -> bool {
        if text.is_empty() {
            debug!("add_note: rejected empty note");
            return false;
        }

        self.notes.push(text.to_string());
        debug!(count = self.notes.len(), "add_note: appended");
        true
    }

    /// Remove every note equal to `text`
    pub fn remove_note(&mut self, text: &str) {
        let before = self.notes.len();
        self.notes.retain(|n| n != text);
        debug!(removed = before - self.notes.len(), "remove_note");
    }

    /// All notes in insertion order
    pub fn get_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Mutable view over all notes; edits land directly in the store
    pub fn get_notes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    // ========================================================================
    // Sharing
    // ========================================================================

    /// Move the store behind a single lock
    pub fn into_shared(self) -> SharedStore {
        SharedStore::new(self)
    }
}

/// A [`Store`] behind one mutex, cloneable across threads
///
/// Every access takes the whole-store lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store
    ///
    /// A poisoned lock is recovered: each store operation is a single step, so a
    /// panicking holder cannot leave a record half-written.
    pub fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Clone the current contents out of the lock
    pub fn snapshot(&self) -> Store {
        self.lock().clone()
    }
}
