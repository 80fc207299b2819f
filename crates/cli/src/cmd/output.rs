//! Shared output formatting for the calc command.

use agecalc_core::age::Age;
use chrono::NaiveDate;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// One computed result for table/JSON output.
#[derive(Debug, Serialize, Tabled)]
pub struct CalcRow {
    #[tabled(rename = "BIRTH DATE")]
    pub birth_date: String,
    #[tabled(rename = "YEARS")]
    pub years: i32,
    #[tabled(rename = "MONTHS")]
    pub months: i32,
    #[tabled(rename = "AGE")]
    pub age: String,
}

impl CalcRow {
    pub fn new(birth: NaiveDate, age: Age) -> Self {
        Self {
            birth_date: birth.format("%Y-%m-%d").to_string(),
            years: age.years,
            months: age.months,
            age: age.to_string(),
        }
    }
}

/// Print results as a table.
pub fn print_table(rows: &[CalcRow]) {
    println!("{}", Table::new(rows).with(Style::sharp()));
}

/// Print results as JSON.
pub fn print_json(rows: &[CalcRow]) {
    println!("{}", serde_json::to_string_pretty(rows).unwrap_or_default());
}

/// Print rendered age strings only (quiet mode).
pub fn print_quiet(rows: &[CalcRow]) {
    for row in rows {
        println!("{}", row.age);
    }
}
