use std::path::PathBuf;
use std::process;

use budget_recurrence::errors::StoreError;
use budget_recurrence::init;
use budget_recurrence::services::CatchUpService;
use budget_recurrence::storage::{default_store_path, JsonStorage, StorageBackend};
use chrono::{Local, NaiveDate};
use colored::Colorize;

const USAGE: &str = "usage: budget_recurrence_cli [--store <path>] [--today <YYYY-MM-DD>]";

struct Args {
    store: Option<PathBuf>,
    today: Option<NaiveDate>,
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), StoreError> {
    let args = parse_args(std::env::args().skip(1))?;
    let path = args.store.unwrap_or_else(default_store_path);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let storage = JsonStorage;
    let mut book = storage.load_or_default(&path)?;
    let report = CatchUpService::run(&mut book, today);
    storage.save(&book, &path)?;

    let summary = format!(
        "{} recurring transaction(s) generated",
        report.transactions_generated
    );
    if report.transactions_generated > 0 {
        println!("{}", summary.green());
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, StoreError> {
    let mut args = Args {
        store: None,
        today: None,
    };
    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--store" => {
                let value = raw.next().ok_or_else(|| {
                    StoreError::InvalidArgument(format!("--store needs a path\n{USAGE}"))
                })?;
                args.store = Some(PathBuf::from(value));
            }
            "--today" => {
                let value = raw.next().ok_or_else(|| {
                    StoreError::InvalidArgument(format!("--today needs a date\n{USAGE}"))
                })?;
                let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                    StoreError::InvalidArgument(format!(
                        "invalid date '{value}', expected YYYY-MM-DD\n{USAGE}"
                    ))
                })?;
                args.today = Some(parsed);
            }
            other => {
                return Err(StoreError::InvalidArgument(format!(
                    "unknown argument '{other}'\n{USAGE}"
                )));
            }
        }
    }
    Ok(args)
}
