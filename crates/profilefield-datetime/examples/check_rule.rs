//! Checks dates against a stored minimum-date rule string.
//!
//! Usage: `cargo run --example check_rule -- "minimumdate=18 years;minimumdateerror=Too young" 2008-05-01 [...]`

use std::env;
use std::process::ExitCode;

use chrono::Utc;
use profilefield_datetime::{decode_rule, DatetimeField, FieldDefinition, GregorianCalendar, Submission};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some((rule, dates)) = args.split_first() else {
        eprintln!("usage: check_rule <rule> <YYYY-MM-DD>...");
        return ExitCode::FAILURE;
    };

    let Some(decoded) = decode_rule(rule) else {
        println!("no usable rule in {:?}; every date passes", rule);
        return ExitCode::SUCCESS;
    };
    println!(
        "rule: at least {} {} ({:?})",
        decoded.quantity,
        decoded.unit,
        decoded.message()
    );

    let field = DatetimeField::new("check", FieldDefinition::new(1, 9999).with_rule(decoded));
    let widget = field.widget(&GregorianCalendar);
    println!("accepted years: {}..={}", widget.start_year, widget.stop_year);

    let now = Utc::now();
    let mut failed = false;
    for date in dates {
        match field.validate_submission(Submission::Text(date), now) {
            Ok(value) => println!("{:<12} ok    {}", date, field.display(value)),
            Err(e) => {
                failed = true;
                println!("{:<12} FAIL  {}", date, e);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
