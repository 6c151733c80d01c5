//! Implementation of the `locprev check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use locprev::StringsTable;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::StringsDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.strings)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked file.
#[derive(Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    entries: usize,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();
    let mut failed = false;

    for file in &args.files {
        let content = read_to_string(file)
            .map_err(|e| miette::miette!("Cannot read {}: {}", file.display(), e))?;

        match StringsTable::parse(&content) {
            Ok(table) => results.push(CheckResult {
                file: file.display().to_string(),
                ok: true,
                entries: table.len(),
                error: None,
            }),
            Err(e) => {
                failed = true;
                if args.json {
                    results.push(CheckResult {
                        file: file.display().to_string(),
                        ok: false,
                        entries: 0,
                        error: Some(e.to_string()),
                    });
                } else {
                    let diagnostic = StringsDiagnostic::from_parse_error(file, &content, &e);
                    eprintln!("{:?}", miette::Report::new(diagnostic));
                }
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    } else {
        for result in &results {
            if result.ok {
                println!(
                    "{}: {} ({} entries)",
                    result.file,
                    "ok".green(),
                    result.entries
                );
            }
        }
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}
