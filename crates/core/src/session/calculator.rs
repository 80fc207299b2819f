//! Session state machine driving the calculator shell.
//!
//! Holds exactly the state the UI owns: the last successfully parsed birth
//! date, the current displayable error, the most recent result, and the
//! append-only history. Every mutation goes through [`Calculator::input_changed`]
//! or [`Calculator::calculate`]; the parsing and arithmetic stay pure.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use super::types::HistoryEntry;
use crate::age::{Age, compute_age};
use crate::date::{ParseDateError, parse_date};

/// Errors a calculator session surfaces to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Calculation was triggered before any input parsed successfully.
    #[error("Please enter your birth date.")]
    MissingBirthDate,

    /// The current input failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseDateError),
}

/// Explicit session state owned by the UI shell.
#[derive(Debug, Default)]
pub struct Calculator {
    birth_date: Option<NaiveDate>,
    error: Option<CalcError>,
    last_result: Option<Age>,
    history: Vec<HistoryEntry>,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current raw input text, as typed.
    ///
    /// Clears any previous error before parsing. On success the parsed date
    /// replaces the stored one; on failure the error is stored for display
    /// and the previously stored date stays as it was.
    pub fn input_changed(&mut self, text: &str) {
        self.error = None;

        match parse_date(text) {
            Ok(date) => {
                self.birth_date = Some(date);
            }
            Err(e) => {
                debug!(input = text, error = %e, "rejected birth date input");
                self.error = Some(e.into());
            }
        }
    }

    /// Run the calculation against `today`, store the result, and append one
    /// history entry.
    ///
    /// With no stored birth date this sets and returns
    /// [`CalcError::MissingBirthDate`] and leaves the history untouched.
    pub fn calculate(&mut self, today: NaiveDate) -> Result<Age, CalcError> {
        let Some(birth) = self.birth_date else {
            self.error = Some(CalcError::MissingBirthDate);
            return Err(CalcError::MissingBirthDate);
        };

        let age = compute_age(birth, today);
        self.last_result = Some(age);
        self.history.push(HistoryEntry {
            input: birth.format("%Y-%m-%d").to_string(),
            age: age.to_string(),
        });

        debug!(%birth, %today, years = age.years, months = age.months, "calculated age");
        Ok(age)
    }

    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<Age> {
        self.last_result
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
