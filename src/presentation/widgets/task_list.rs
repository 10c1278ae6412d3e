//! Task List Widget
//!
//! The editable list: one row per task with a checkbox, the task name
//! (crossed out once completed) and, for the task being edited, an
//! inline edit field in place of the name.

use crate::app::state::EditState;
use crate::domain::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// List widget rendering a slice of tasks with a selection highlight.
pub struct TaskList<'a> {
    tasks: &'a [Task],
    selected: usize,
    editing: Option<&'a EditState>,
    block: Option<Block<'a>>,
}

impl<'a> TaskList<'a> {
    #[must_use]
    pub fn new(tasks: &'a [Task]) -> Self {
        Self {
            tasks,
            selected: 0,
            editing: None,
            block: None,
        }
    }

    /// Index of the selected row
    #[must_use]
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// The task currently in inline-edit mode, if any
    #[must_use]
    pub fn editing(mut self, editing: Option<&'a EditState>) -> Self {
        self.editing = editing;
        self
    }

    /// Surrounding block (borders, title)
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row_line(&self, task: &Task, is_selected: bool) -> Line<'a> {
        let checkbox = if task.completed { "[x] " } else { "[ ] " };

        let mut name_style = Style::default().fg(Color::White);
        if task.completed {
            name_style = name_style
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![Span::styled(
            checkbox.to_string(),
            Style::default().fg(Color::Cyan),
        )];

        match self.editing {
            Some(edit) if edit.id == task.id => {
                // Inline edit field replaces the name; trailing block
                // marks the cursor position.
                spans.push(Span::styled(
                    edit.text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
            _ => spans.push(Span::styled(task.name.clone(), name_style)),
        }

        let mut line = Line::from(spans);
        if is_selected {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        line
    }
}

impl Widget for TaskList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.tasks.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "No tasks. Press 'a' to add one.",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        // Keep the selection in view.
        let height = area.height as usize;
        let offset = self.selected.saturating_sub(height.saturating_sub(1));

        for (row, (index, task)) in self
            .tasks
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let line = self.row_line(task, index == self.selected);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}
