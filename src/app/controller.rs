//! Task List Controller
//!
//! Owns the local state and drives the remote store. Every user intent
//! maps to at most one network round trip, awaited to completion before
//! the corresponding state transition is applied.
//!
//! Recovery policy per operation: a failed list leaves the list empty, a
//! failed create or update leaves local state untouched (no optimistic
//! mutation is ever applied, so there is nothing to roll back), and a
//! failed delete still removes the task locally, matching the store's
//! unconditional-removal contract. Every failure is logged and surfaced
//! in the status bar via `last_error`.

use crate::app::state::{InputMode, TodoState};
use crate::infrastructure::store::TaskStore;

/// The one component: local state plus a handle to the remote store.
#[derive(Debug)]
pub struct TaskListController<S> {
    store: S,
    /// Local state, readable by the view
    pub state: TodoState,
}

impl<S: TaskStore> TaskListController<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: TodoState::new(),
        }
    }

    /// Initial load. Runs once at startup; there is no automatic refresh
    /// afterward; every later mutation is applied incrementally from the
    /// individual call responses.
    pub async fn load(&mut self) {
        match self.store.fetch_all().await {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "Task list loaded");
                self.state.loaded(tasks);
                self.state.clear_error();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Task list fetch failed, starting empty");
                self.state.loaded(Vec::new());
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Create a task from the pending input. A blank (after trimming)
    /// input is a no-op and issues no network call; otherwise the trimmed
    /// text is sent, the returned task is appended at the end and the
    /// input is cleared.
    pub async fn add(&mut self) {
        let name = self.state.pending_input.trim().to_string();
        if name.is_empty() {
            return;
        }

        match self.store.create(&name).await {
            Ok(task) => {
                self.state.appended(task);
                self.state.pending_input.clear();
                self.state.clear_error();
            }
            Err(e) => {
                tracing::error!(error = %e, "Create failed");
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Flip the completed flag of the task with the given id. The current
    /// name is resent unchanged (full-replace update semantics).
    pub async fn toggle(&mut self, id: &str) {
        let Some(task) = self.state.tasks.iter().find(|t| t.id == id).cloned() else {
            return;
        };

        match self
            .store
            .update(&task.id, &task.name, !task.completed)
            .await
        {
            Ok(updated) => {
                self.state.replaced(updated);
                self.state.clear_error();
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Toggle failed");
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Enter inline-edit mode for the given task. No remote call.
    pub fn start_edit(&mut self, id: &str) {
        self.state.begin_edit(id);
    }

    /// Commit the pending edit text as the task's new name, resending the
    /// existing completed flag unchanged. The edit text is sent as-is,
    /// blank included; the store accepts empty names. On failure the
    /// edit stays open so nothing typed is lost.
    pub async fn save_edit(&mut self) {
        let Some(edit) = self.state.editing.clone() else {
            return;
        };
        let Some(task) = self.state.tasks.iter().find(|t| t.id == edit.id).cloned() else {
            self.state.cancel_edit();
            return;
        };

        match self.store.update(&task.id, &edit.text, task.completed).await {
            Ok(updated) => {
                self.state.replaced(updated);
                self.state.cancel_edit();
                self.state.clear_error();
            }
            Err(e) => {
                tracing::error!(id = %edit.id, error = %e, "Rename failed");
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Leave inline-edit mode without a remote call.
    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Delete the task with the given id. The task is dropped from local
    /// state unconditionally, whatever the remote call's outcome.
    pub async fn delete(&mut self, id: &str) {
        if let Err(e) = self.store.remove(id).await {
            tracing::error!(id, error = %e, "Delete failed, removing locally anyway");
            self.state.set_error(e.to_string());
        } else {
            self.state.clear_error();
        }
        self.state.removed(id);
    }

    /// Toggle, edit or delete act on the current selection in the view.
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.state.selected_task().map(|t| t.id.clone())
    }

    /// Leave add mode, keeping whatever was typed in the input row.
    pub fn stop_adding(&mut self) {
        self.state.input_mode = InputMode::Normal;
    }

    /// Enter add mode: keystrokes go to the new-task input row.
    pub fn start_adding(&mut self) {
        self.state.input_mode = InputMode::Adding;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::error::{StoreError, StoreResult};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// In-memory store double: answers like the remote store would and
    /// records which operations were issued.
    #[derive(Default)]
    struct FakeStore {
        initial: Vec<Task>,
        fail: bool,
        calls: RefCell<Vec<String>>,
        next_id: RefCell<u32>,
    }

    impl FakeStore {
        fn with_tasks(initial: Vec<Task>) -> Self {
            Self {
                initial,
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn err() -> StoreError {
            StoreError::Status {
                operation: "test",
                status: 500,
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl TaskStore for FakeStore {
        async fn fetch_all(&self) -> StoreResult<Vec<Task>> {
            self.record("list".into());
            if self.fail {
                return Err(Self::err());
            }
            Ok(self.initial.clone())
        }

        async fn create(&self, name: &str) -> StoreResult<Task> {
            self.record(format!("create({name})"));
            if self.fail {
                return Err(Self::err());
            }
            *self.next_id.borrow_mut() += 1;
            Ok(Task::new(
                format!("id-{}", self.next_id.borrow()),
                name,
                false,
            ))
        }

        async fn update(&self, id: &str, name: &str, completed: bool) -> StoreResult<Task> {
            self.record(format!("update({id},{name},{completed})"));
            if self.fail {
                return Err(Self::err());
            }
            Ok(Task::new(id, name, completed))
        }

        async fn remove(&self, id: &str) -> StoreResult<()> {
            self.record(format!("delete({id})"));
            if self.fail {
                return Err(Self::err());
            }
            Ok(())
        }
    }

    fn seeded() -> Vec<Task> {
        vec![
            Task::new("1", "one", false),
            Task::new("2", "two", true),
        ]
    }

    #[tokio::test]
    async fn test_add_trims_and_appends() {
        let mut ctl = TaskListController::new(FakeStore::with_tasks(seeded()));
        ctl.load().await;

        ctl.state.pending_input = "  Buy milk  ".to_string();
        ctl.add().await;

        assert_eq!(ctl.state.tasks.len(), 3);
        let added = ctl.state.tasks.last().unwrap();
        assert_eq!(added.name, "Buy milk");
        assert!(!added.completed);
        assert_eq!(ctl.state.pending_input, "");
    }

    #[tokio::test]
    async fn test_blank_add_is_a_noop_without_network() {
        let mut ctl = TaskListController::new(FakeStore::with_tasks(seeded()));
        ctl.load().await;

        ctl.state.pending_input = "   ".to_string();
        ctl.add().await;

        assert_eq!(ctl.state.tasks, seeded());
        assert_eq!(ctl.state.pending_input, "   ");
        // Only the initial list fetch went out.
        assert_eq!(ctl.store.calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn test_toggle_negates_in_place() {
        let mut ctl = TaskListController::new(FakeStore::with_tasks(seeded()));
        ctl.load().await;

        ctl.toggle("1").await;

        assert_eq!(ctl.state.tasks[0], Task::new("1", "one", true));
        assert_eq!(ctl.state.tasks[1], Task::new("2", "two", true));
        // The unchanged name was resent in full.
        assert_eq!(
            ctl.store.calls(),
            vec!["list".to_string(), "update(1,one,true)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_save_edit_keeps_completed_flag() {
        let mut ctl = TaskListController::new(FakeStore::with_tasks(seeded()));
        ctl.load().await;

        ctl.start_edit("2");
        ctl.state.editing.as_mut().unwrap().text = "renamed".to_string();
        ctl.save_edit().await;

        assert_eq!(ctl.state.tasks[1], Task::new("2", "renamed", true));
        assert_eq!(ctl.state.editing, None);
        assert_eq!(ctl.state.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_delete_removes_even_when_the_call_fails() {
        let mut seeded_failing = FakeStore::failing();
        seeded_failing.initial = seeded();
        let mut ctl = TaskListController::new(seeded_failing);
        // Load fails too; install state directly.
        ctl.state.loaded(seeded());

        ctl.delete("1").await;

        assert_eq!(ctl.state.tasks, vec![Task::new("2", "two", true)]);
        assert!(ctl.state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_failed_load_yields_empty_list_with_error() {
        let mut ctl = TaskListController::new(FakeStore::failing());
        ctl.load().await;

        assert!(ctl.state.tasks.is_empty());
        assert!(ctl.state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_failed_create_leaves_state_untouched() {
        let mut ctl = TaskListController::new(FakeStore::failing());
        ctl.state.loaded(seeded());

        ctl.state.pending_input = "new".to_string();
        ctl.add().await;

        assert_eq!(ctl.state.tasks, seeded());
        // Input survives so the user can retry.
        assert_eq!(ctl.state.pending_input, "new");
        assert!(ctl.state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_the_edit_open() {
        let mut ctl = TaskListController::new(FakeStore::failing());
        ctl.state.loaded(seeded());

        ctl.start_edit("1");
        ctl.state.editing.as_mut().unwrap().text = "typed".to_string();
        ctl.save_edit().await;

        assert_eq!(ctl.state.tasks, seeded());
        assert_eq!(ctl.state.editing.as_ref().unwrap().text, "typed");
        assert!(ctl.state.last_error.is_some());
    }
}
