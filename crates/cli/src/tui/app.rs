//! Application state and update logic following The Elm Architecture.

use chrono::NaiveDate;

use agecalc_core::session::Calculator;

/// Messages that drive state updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Input handling
    InputChar(char),
    InputBackspace,

    // Actions
    Calculate,

    // System
    Quit,
}

/// Main application state.
pub struct App {
    /// Reference date every calculation runs against.
    pub today: NaiveDate,

    /// Core calculator session (birth date, error, last result, history).
    pub calculator: Calculator,

    /// Raw text currently in the input field.
    pub input_buffer: String,

    /// Should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(today: NaiveDate) -> Self {
        App {
            today,
            calculator: Calculator::new(),
            input_buffer: String::new(),
            should_quit: false,
        }
    }

    /// Process a message and update state.
    ///
    /// Every edit re-feeds the whole buffer to the session, so the error
    /// message is cleared and re-derived on each keystroke.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::InputChar(c) => {
                self.input_buffer.push(c);
                self.calculator.input_changed(&self.input_buffer);
            }
            Message::InputBackspace => {
                self.input_buffer.pop();
                self.calculator.input_changed(&self.input_buffer);
            }
            Message::Calculate => {
                // A missing birth date surfaces through the session's own
                // error state; nothing extra to do here.
                let _ = self.calculator.calculate(self.today);
            }
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }
}
