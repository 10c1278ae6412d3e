//! Main Event Loop
//!
//! Polls keyboard input, turns keys into user intents on the controller
//! and renders the current state. Each intent's remote call is awaited to
//! completion before the next event is processed.

use crate::app::config::TuiConfig;
use crate::app::controller::TaskListController;
use crate::app::state::InputMode;
use crate::error::Result;
use crate::infrastructure::store::TaskStore;
use crate::presentation::{StatusBar, TaskList, Tui};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Main application runner
pub struct App<S> {
    controller: TaskListController<S>,
    tick_rate: Duration,
    should_quit: bool,
}

impl<S: TaskStore> App<S> {
    #[must_use]
    pub fn new(store: S, config: &TuiConfig) -> Self {
        Self {
            controller: TaskListController::new(store),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            should_quit: false,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        // One initial fetch; afterwards state is only reconciled from the
        // individual call responses.
        self.controller.load().await;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events().await?;
        }

        tracing::info!("Shutting down");
        Ok(())
    }

    async fn handle_events(&mut self) -> Result<()> {
        if !event::poll(self.tick_rate)? {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            // Ctrl-C quits from any mode.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.should_quit = true;
                return Ok(());
            }

            match self.controller.state.input_mode {
                InputMode::Normal => self.handle_normal_key(key).await,
                InputMode::Adding => self.handle_adding_key(key).await,
                InputMode::Editing => self.handle_editing_key(key).await,
            }
        }

        Ok(())
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.controller.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.controller.state.select_prev(),
            KeyCode::Char('a') => self.controller.start_adding(),
            KeyCode::Char(' ') => {
                if let Some(id) = self.controller.selected_id() {
                    self.controller.toggle(&id).await;
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.controller.selected_id() {
                    self.controller.start_edit(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.controller.selected_id() {
                    self.controller.delete(&id).await;
                }
            }
            _ => {}
        }
    }

    async fn handle_adding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.controller.stop_adding(),
            KeyCode::Enter => self.controller.add().await,
            KeyCode::Backspace => {
                self.controller.state.pending_input.pop();
            }
            KeyCode::Char(c) => self.controller.state.pending_input.push(c),
            _ => {}
        }
    }

    async fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.controller.cancel_edit(),
            KeyCode::Enter => self.controller.save_edit().await,
            KeyCode::Backspace => {
                if let Some(edit) = self.controller.state.editing.as_mut() {
                    edit.text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(edit) = self.controller.state.editing.as_mut() {
                    edit.text.push(c);
                }
            }
            _ => {}
        }
    }

    /// Render the UI: input row, task list, status bar.
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // New-task input row
                Constraint::Min(0),    // Task list
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.render_input_row(frame, chunks[0]);
        self.render_task_list(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);
    }

    fn render_input_row(&self, frame: &mut Frame, area: Rect) {
        let state = &self.controller.state;
        let adding = state.input_mode == InputMode::Adding;

        let border_style = if adding {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(state.pending_input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" New task "),
        );
        frame.render_widget(input, area);

        if adding {
            // Place the cursor after the text by rendered width, not byte
            // length, so wide (CJK) and multibyte input keep it aligned.
            let column = area.x + 1 + input_display_width(&state.pending_input);
            frame.set_cursor_position(Position::new(column, area.y + 1));
        }
    }

    fn render_task_list(&self, frame: &mut Frame, area: Rect) {
        let state = &self.controller.state;

        let list = TaskList::new(&state.tasks)
            .selected(state.selected)
            .editing(state.editing.as_ref())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" To Do List "),
            );
        frame.render_widget(list, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state = &self.controller.state;
        let done = state.tasks.iter().filter(|t| t.completed).count();
        let message = format!("{done}/{} done", state.tasks.len());

        let hints = match state.input_mode {
            InputMode::Normal => vec![
                ("a", "Add"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Space", "Toggle"),
                ("j/k", "Move"),
                ("q", "Quit"),
            ],
            InputMode::Adding => vec![("Enter", "Create"), ("Esc", "Back")],
            InputMode::Editing => vec![("Enter", "Save"), ("Esc", "Cancel")],
        };

        let status_bar = StatusBar::new()
            .hints(hints)
            .message(&message)
            .error(state.last_error.as_deref());

        frame.render_widget(status_bar, area);
    }
}

/// Terminal column width of the input text as rendered.
fn input_display_width(input: &str) -> u16 {
    UnicodeWidthStr::width(input) as u16
}
