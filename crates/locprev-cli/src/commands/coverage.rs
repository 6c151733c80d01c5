//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use locprev::{Bundle, StringsTable};
use miette::{miette, Result};
use serde::Serialize;

use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Bundle directory containing <language>.lproj subdirectories.
    #[arg(long)]
    pub bundle: PathBuf,

    /// Source language whose keys define full coverage.
    #[arg(long)]
    pub source: String,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Strings table name (defaults to Localizable).
    #[arg(long)]
    pub table: Option<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Load the strings table of one language directory, if it exists.
fn lproj_table(
    bundle: &Bundle,
    language: &str,
    table: Option<&str>,
) -> Result<Option<StringsTable>> {
    let Some(path) = bundle.path_for_resource(language, "lproj") else {
        return Ok(None);
    };
    let Some(resources) = Bundle::at_path(&path) else {
        return Ok(None);
    };
    resources
        .strings_table(table)
        .map(Some)
        .map_err(|e| miette!("{}", e))
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let bundle = Bundle::at_path(&args.bundle)
        .ok_or_else(|| miette!("bundle directory {} does not exist", args.bundle.display()))?;
    let table = args.table.as_deref();

    let source_table = lproj_table(&bundle, &args.source, table)?.ok_or_else(|| {
        miette!(
            "no {}.lproj directory in {}",
            args.source,
            args.bundle.display()
        )
    })?;
    let source_keys: BTreeSet<String> = source_table.keys().map(str::to_string).collect();
    let source_count = source_keys.len();

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    let mut incomplete = false;

    for lang in &args.lang {
        let missing: Vec<String> = match lproj_table(&bundle, lang, table)? {
            Some(lang_table) => source_keys
                .iter()
                .filter(|key| lang_table.get(key).is_none())
                .cloned()
                .collect(),
            None => source_keys.iter().cloned().collect(),
        };

        if !missing.is_empty() {
            incomplete = true;
        }
        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: source_count - missing.len(),
            missing,
        });
    }

    if args.json {
        let json: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|coverage| CoverageJson {
                language: coverage.language.clone(),
                translated: coverage.translated,
                total: source_count,
                missing: coverage.missing.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_coverage_table(source_count, &coverage_data));
    }

    Ok(if args.strict && incomplete {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
