//! One-shot calculation command.

use chrono::{Local, NaiveDate};
use tracing::debug;

use agecalc_core::age::compute_age;
use agecalc_core::date::parse_date;

use super::output::{CalcRow, print_json, print_quiet, print_table};
use crate::{CalcArgs, OutputFormat};

pub fn run(args: &CalcArgs) {
    let today = resolve_today(args.today.as_deref());

    let mut rows = Vec::with_capacity(args.dates.len());
    for text in &args.dates {
        let birth = match parse_date(text) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };

        let age = compute_age(birth, today);
        debug!(%birth, %today, years = age.years, months = age.months, "computed age");
        rows.push(CalcRow::new(birth, age));
    }

    match args.output {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Quiet => print_quiet(&rows),
    }
}

fn resolve_today(arg: Option<&str>) -> NaiveDate {
    match arg {
        Some(text) => match parse_date(text) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Local::now().date_naive(),
    }
}
