//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation (form and report)
//! - Input event handling
//! - Running the evaluation engine and exporting its reports

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::{self, CsvRenderer, TextRenderer};
use crate::domain::HealthReport;

use super::ui::{
    form::{render_form, FormState},
    render_disclaimer,
    report::render_report,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Report,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Measurement form state
    form_state: FormState,

    /// The last evaluated report, if any
    report: Option<HealthReport>,

    /// Result of the last export attempt, shown in the report footer
    export_status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Form,
            should_quit: false,
            form_state: FormState::default(),
            report: None,
            export_status: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Form => render_form(f, content_area, &self.form_state),
                    Screen::Report => {
                        if let Some(report) = &self.report {
                            render_report(
                                f,
                                content_area,
                                report,
                                self.export_status.as_deref(),
                            );
                        }
                    }
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Report => self.handle_report_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Backspace => {
                self.form_state.delete_char();
            }
            KeyCode::Delete => {
                self.form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            KeyCode::Char(c) => {
                // The field gets first refusal; rejected characters act as
                // command keys.
                if !self.form_state.input_char(c) && c.to_ascii_lowercase() == 's' {
                    self.form_state.load_sample_data();
                }
            }
            _ => {}
        }
    }

    fn handle_report_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.export_status = None;
                self.screen = Screen::Form;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = FormState::default();
                self.export_status = None;
                self.screen = Screen::Form;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.export(&CsvRenderer::new());
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.export(&TextRenderer::new());
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        match self.form_state.to_health_input() {
            Ok(input) => {
                let report = crate::evaluate(&input);
                tracing::info!(
                    emergency = report.emergency,
                    worst = %report.worst_severity(),
                    "evaluated measurement snapshot"
                );
                self.report = Some(report);
                self.export_status = None;
                self.screen = Screen::Report;
            }
            Err(message) => {
                self.form_state.error_message = Some(message);
            }
        }
    }

    fn export<R>(&mut self, renderer: &R)
    where
        R: crate::ports::ReportRenderer,
        R::Error: Into<adapters::ExportError>,
    {
        let Some(report) = &self.report else {
            return;
        };

        self.export_status = match adapters::write_report(renderer, report) {
            Ok(path) => Some(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!("Export failed: {e}");
                Some(format!("Export failed: {e}"))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_moves_to_report() {
        let mut app = App::new();
        app.form_state.load_sample_data();
        app.submit_form();

        assert_eq!(app.screen, Screen::Report);
        assert!(app.report.is_some());
    }

    #[test]
    fn test_invalid_field_stays_on_form() {
        let mut app = App::new();
        app.form_state.fields[0].value = "1.2.3".to_string();
        app.submit_form();

        assert_eq!(app.screen, Screen::Form);
        assert!(app.form_state.error_message.is_some());
    }

    #[test]
    fn test_rejected_char_triggers_sample_fill() {
        let mut app = App::new();
        app.handle_form_key(KeyCode::Char('s'));
        assert!(!app.form_state.fields[0].value.is_empty());
    }
}
