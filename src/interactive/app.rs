//! TUI application state and logic

use crate::core::Alert;
use crate::dictionary::DictionaryOracle;
use crate::output::formatters::points_label;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D: DictionaryOracle> {
    pub session: Session<D>,
    pub input_buffer: String,
    pub input_mode: InputMode,
    /// Rejection currently on screen, if any
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Bonus,
}

impl<D: DictionaryOracle> App<D> {
    #[must_use]
    pub fn new(session: Session<D>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit whatever is in the input box
    ///
    /// Accepted words clear the box. A rejection opens an alert and leaves the
    /// text in place so it can be corrected. Blank input does nothing.
    pub fn submit_input(&mut self) {
        match self.session.submit(&self.input_buffer) {
            Ok(None) => {}
            Ok(Some(scored)) => {
                let style = if scored.bonus {
                    MessageStyle::Bonus
                } else {
                    MessageStyle::Success
                };
                self.add_message(
                    &format!(
                        "{} {}",
                        scored.word,
                        points_label(scored.points, scored.bonus)
                    ),
                    style,
                );
                self.input_buffer.clear();
            }
            Err(rejection) => {
                self.alert = Some(rejection.alert(self.session.root_word()));
                self.input_mode = InputMode::Alert;
            }
        }
    }

    /// Pick a new root word and reset the game
    pub fn start_over(&mut self) {
        let root = self.session.start_over().to_uppercase();
        self.input_buffer.clear();
        self.dismiss_alert();
        self.messages.clear();
        self.add_message(&format!("New game! Root word: {root}"), MessageStyle::Info);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r' | 'n') if ctrl => self.start_over(),
                KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: DictionaryOracle>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D>(terminal: &mut Terminal<B>, mut app: App<D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: DictionaryOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::session::GameConfig;

    fn app() -> App<WordSet> {
        let dictionary = WordSet::english(["silt", "tin", "lists", "listen"]);
        App::new(Session::with_root(
            &GameConfig::default(),
            dictionary,
            "listen",
        ))
    }

    fn press(app: &mut App<WordSet>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<WordSet>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn accepted_word_clears_input() {
        let mut app = app();
        type_word(&mut app, "silt");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 4);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.messages.last().unwrap().text, "silt +4");
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        let mut app = app();
        type_word(&mut app, "lists");

        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You cannot spell that word from 'listen'");
        assert_eq!(app.input_buffer, "lists");

        // Typing is blocked until the alert is dismissed
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_buffer, "lists");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
    }

    #[test]
    fn blank_submit_is_silent() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "t");
    }

    #[test]
    fn ctrl_r_starts_over() {
        let mut app = app();
        type_word(&mut app, "tin");
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        assert_eq!(app.session.score(), 0);
        assert!(app.session.used_words().is_empty());
        assert_eq!(app.session.root_word(), "listen");
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
