//! Implementation of the `locprev resolve` command.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use locprev::{compute_suggestions, Bundle, Locale, LocalizedString};
use miette::{miette, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Key to resolve.
    pub key: String,

    /// Bundle directory to search.
    #[arg(long)]
    pub bundle: PathBuf,

    /// Locale identifier (e.g. en, pt-BR).
    #[arg(long)]
    pub locale: String,

    /// Strings table name (defaults to Localizable).
    #[arg(long)]
    pub table: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveResult {
    key: String,
    locale: String,
    value: Option<String>,
    suggestions: Vec<String>,
}

/// Collect every key visible to this locale, for suggestions on a miss.
fn visible_keys(bundle: &Bundle, locale: &Locale, table: Option<&str>) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for candidate in locale.lookup_candidates() {
        if let Some(path) = bundle.path_for_resource(candidate, "lproj") {
            if let Some(resources) = Bundle::at_path(&path) {
                if let Ok(strings) = resources.strings_table(table) {
                    keys.extend(strings.keys().map(str::to_string));
                }
            }
        }
    }
    keys
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let bundle = Bundle::at_path(&args.bundle)
        .ok_or_else(|| miette!("bundle directory {} does not exist", args.bundle.display()))?;
    let locale = Locale::try_new(&args.locale).map_err(|e| miette!("{}", e))?;

    let request = LocalizedString::builder()
        .key(args.key.clone())
        .maybe_table(args.table.clone())
        .bundle(bundle.clone())
        .locale(locale.clone())
        .build();
    let value = request.lookup();

    let suggestions = if value.is_none() {
        let keys = visible_keys(&bundle, &locale, args.table.as_deref());
        compute_suggestions(&args.key, keys.iter().map(String::as_str))
    } else {
        Vec::new()
    };

    if args.json {
        let output = ResolveResult {
            key: args.key.clone(),
            locale: locale.identifier().to_string(),
            value: value.clone(),
            suggestions: suggestions.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(if value.is_some() {
            exitcode::OK
        } else {
            exitcode::DATAERR
        });
    }

    match value {
        Some(found) => {
            println!("{}", found);
            Ok(exitcode::OK)
        }
        None => {
            eprintln!(
                "{}: key '{}' not found for locale '{}'",
                "miss".red(),
                args.key,
                locale
            );
            if !suggestions.is_empty() {
                eprintln!("did you mean: {}?", suggestions.join(", "));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
