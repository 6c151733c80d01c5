//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "es", "fr").
    pub language: String,
    /// Number of keys translated.
    pub translated: usize,
    /// Keys missing from this language.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing keys"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            preview_keys(&lang.missing),
        ]);
    }

    table
}

/// Show up to three missing keys, then a count of the rest.
fn preview_keys(missing: &[String]) -> String {
    match missing.len() {
        0 => "-".to_string(),
        1..=3 => missing.join(", "),
        n => format!("{}, … ({} more)", missing[..3].join(", "), n - 3),
    }
}
