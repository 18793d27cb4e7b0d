use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use crate::config::Config;
use crate::data::{AddError, Store, Student};
use crate::stats;
use crate::ui::components::{
    Footer, Notice, NoticeState, Roster, RosterState, StudentForm, StudentFormState,
};
use crate::ui::events::InputMode;
use crate::ui::terminal_guard::TerminalGuard;

/// Top-level application state: the record store plus every piece of
/// UI state the components render from.
pub struct App {
    /// Record store backing the roster
    store: Store,
    /// Set by Esc or Ctrl+Q, checked after every event
    should_quit: bool,
    /// Which surface owns the keyboard right now
    input_mode: InputMode,
    /// Entry form state
    form: StudentFormState,
    /// Roster scroll state
    roster: RosterState,
    /// Modal notice state
    notice: NoticeState,
}

impl App {
    /// Create the app and load every stored record into memory.
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::open(&config.database),
            should_quit: false,
            input_mode: InputMode::default(),
            form: StudentFormState::new(),
            roster: RosterState::new(),
            notice: NoticeState::new(),
        }
    }

    /// Records currently loaded, in display order
    pub fn students(&self) -> &[Student] {
        self.store.students()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        // Hand the terminal back even when the loop errored
        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Block until the next input event; every operation runs on this
            // thread, inside the handler that triggered it
            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+Q quits from either mode
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Notice => match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.notice.hide();
                    self.input_mode = InputMode::Form;
                }
                _ => {}
            },
            InputMode::Form => self.handle_form_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Readline shortcuts on the focused field
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => {
                    self.form.focused_mut().move_start();
                    return;
                }
                KeyCode::Char('e') => {
                    self.form.focused_mut().move_end();
                    return;
                }
                KeyCode::Char('u') => {
                    self.form.focused_mut().delete_to_start();
                    return;
                }
                KeyCode::Char('k') => {
                    self.form.focused_mut().delete_to_end();
                    return;
                }
                KeyCode::Char('w') => {
                    self.form.focused_mut().delete_word();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::F(2) => self.show_class_average(),
            KeyCode::F(3) => self.show_top_student(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::PageUp => self.roster.page_up(),
            KeyCode::PageDown => self.roster.page_down(self.store.len()),
            KeyCode::Backspace => self.form.focused_mut().delete_char(),
            KeyCode::Delete => self.form.focused_mut().delete_forward(),
            KeyCode::Left => self.form.focused_mut().move_left(),
            KeyCode::Right => self.form.focused_mut().move_right(),
            KeyCode::Home => self.form.focused_mut().move_start(),
            KeyCode::End => self.form.focused_mut().move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.focused_mut().insert_char(c);
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Validate the form, store the record, and reset the fields.
    fn submit(&mut self) {
        match self.form.parse() {
            Ok(student) => {
                // A failed write is logged and otherwise treated as a
                // success; the record is already in the in-memory list
                if let Err(err) = self.store.add(student) {
                    self.report(AddError::Storage(err));
                }
                self.roster.scroll_to_bottom(self.store.len());
                self.form.clear();
            }
            Err(err) => self.report(err),
        }
    }

    /// Route an error by kind: format and range errors go to the user,
    /// storage failures are logged only, unknown gets a generic notice.
    fn report(&mut self, err: AddError) {
        match err {
            AddError::Format { field } => {
                tracing::debug!(field, "Rejected non-numeric marks input");
                self.notice.show_error("Invalid Marks", err.to_string());
                self.input_mode = InputMode::Notice;
            }
            AddError::Range { field, value } => {
                tracing::debug!(field, value, "Rejected out-of-range marks");
                self.notice.show_error("Invalid Marks", err.to_string());
                self.input_mode = InputMode::Notice;
            }
            AddError::Storage(cause) => {
                tracing::error!(error = %cause, "Student kept in memory, database write failed");
            }
            AddError::Unknown(_) => {
                self.notice.show_error("Unexpected Error", err.to_string());
                self.input_mode = InputMode::Notice;
            }
        }
    }

    fn show_class_average(&mut self) {
        let average = stats::class_average(self.store.students());
        self.notice.show_info(
            "Class Average",
            format!("Average marks of all students: {:.2}", average),
        );
        self.input_mode = InputMode::Notice;
    }

    fn show_top_student(&mut self) {
        match stats::top_student(self.store.students()) {
            Some(top) => {
                let message = format!(
                    "Top student is: {} with average marks of {:.2}",
                    top.name,
                    top.average()
                );
                self.notice.show_info("Top Student", message);
            }
            None => self.notice.show_info("Top Student", "No students available."),
        }
        self.input_mode = InputMode::Notice;
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::vertical([
            Constraint::Length(7), // Entry form
            Constraint::Min(5),    // Roster
            Constraint::Length(1), // Footer
        ])
        .split(size);

        StudentForm::new().render(chunks[0], f.buffer_mut(), &self.form);

        Roster::new(self.store.students()).render(chunks[1], f.buffer_mut(), &mut self.roster);

        Footer::for_mode(self.input_mode, self.store.len()).render(chunks[2], f.buffer_mut());

        // Place the terminal cursor on the focused field
        if self.input_mode == InputMode::Form {
            let (cx, cy) = self.form.cursor_position(chunks[0]);
            f.set_cursor_position((cx, cy));
        }

        // Draw the notice over everything else
        if self.notice.is_visible() {
            f.render_widget(Notice::new(&self.notice), size);
        }
    }
}
