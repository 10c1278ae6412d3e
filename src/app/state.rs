//! Local State
//!
//! The in-memory mirror of the remote task list plus transient UI-only
//! state: the pending new-task input, the inline-edit buffer, the list
//! selection and the last surfaced error.
//!
//! All mutations are small named transitions so the reconciliation rules
//! can be tested without a rendering harness. The remote store is the
//! source of truth: transitions only ever install values that came back
//! in a server response.

use crate::domain::{Task, TaskId};

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and single-key intents
    #[default]
    Normal,
    /// Typing into the new-task input row
    Adding,
    /// Typing into a task's inline edit field
    Editing,
}

/// Inline-edit state for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// The task being edited
    pub id: TaskId,
    /// The pending edit text, seeded from the task's current name
    pub text: String,
}

/// The whole of the application's mutable state.
#[derive(Debug, Clone, Default)]
pub struct TodoState {
    /// Tasks in store order: initial fetch order, new tasks appended last,
    /// updated tasks replaced in place.
    pub tasks: Vec<Task>,
    /// Pending new-task input text
    pub pending_input: String,
    /// The task currently in inline-edit mode, if any
    pub editing: Option<EditState>,
    /// Index of the selected task (clamped on removal)
    pub selected: usize,
    /// Current input routing
    pub input_mode: InputMode,
    /// Last operation failure, shown in the status bar until the next
    /// successful operation
    pub last_error: Option<String>,
}

impl TodoState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected task, if the list is non-empty.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Install the initial list fetch result.
    pub fn loaded(&mut self, tasks: Vec<Task>) {
        tracing::debug!(count = tasks.len(), "Local state populated");
        self.tasks = tasks;
        self.selected = 0;
    }

    /// Append a freshly created task at the end of the sequence.
    pub fn appended(&mut self, task: Task) {
        tracing::debug!(id = %task.id, "Task appended");
        self.tasks.push(task);
    }

    /// Replace the task with a matching id in place, keeping its position.
    /// All other tasks are untouched. Unknown ids are ignored.
    pub fn replaced(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            tracing::debug!(id = %task.id, "Task replaced in place");
            *slot = task;
        } else {
            tracing::warn!(id = %task.id, "Update response for unknown task ignored");
        }
    }

    /// Drop the task with the given id from the sequence and clamp the
    /// selection back into range.
    pub fn removed(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
        tracing::debug!(id, remaining = self.tasks.len(), "Task removed");
    }

    /// Enter inline-edit mode for the given task, seeding the edit buffer
    /// with its current name. No-op for unknown ids.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.editing = Some(EditState {
                id: task.id.clone(),
                text: task.name.clone(),
            });
            self.input_mode = InputMode::Editing;
        }
    }

    /// Leave inline-edit mode, discarding the pending edit text.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_tasks() -> Vec<Task> {
        vec![
            Task::new("1", "one", false),
            Task::new("2", "two", true),
            Task::new("3", "three", false),
        ]
    }

    #[test]
    fn test_replace_keeps_position_and_neighbors() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());

        state.replaced(Task::new("2", "two", false));

        assert_eq!(state.tasks[0], Task::new("1", "one", false));
        assert_eq!(state.tasks[1], Task::new("2", "two", false));
        assert_eq!(state.tasks[2], Task::new("3", "three", false));
    }

    #[test]
    fn test_replace_unknown_id_is_ignored() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());

        state.replaced(Task::new("99", "ghost", true));
        assert_eq!(state.tasks, three_tasks());
    }

    #[test]
    fn test_removal_clamps_selection() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());
        state.selected = 2;

        state.removed("3");
        assert_eq!(state.selected, 1);

        state.removed("2");
        state.removed("1");
        assert_eq!(state.selected, 0);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_edit_lifecycle() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());

        state.begin_edit("2");
        assert_eq!(state.input_mode, InputMode::Editing);
        assert_eq!(
            state.editing,
            Some(EditState {
                id: "2".to_string(),
                text: "two".to_string()
            })
        );

        state.cancel_edit();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.editing, None);
        // Cancelling never touches the task list itself.
        assert_eq!(state.tasks, three_tasks());
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());

        state.begin_edit("nope");
        assert_eq!(state.editing, None);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = TodoState::new();
        state.loaded(three_tasks());

        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
    }
}
