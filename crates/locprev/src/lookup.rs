//! Locale-aware localized-string lookup.

use bon::Builder;

use crate::bundle::Bundle;
use crate::locale::Locale;

/// A locale-aware localized-string lookup request.
///
/// This is the production-path API behind the `localize!` macro; build one
/// with the generated builder and call [`LocalizedString::resolve`].
///
/// # Example
///
/// ```
/// use locprev::{Locale, LocalizedString};
///
/// let request = LocalizedString::builder()
///     .key("Hello")
///     .locale(Locale::new("en"))
///     .build();
/// // With no bundle on disk the key comes back unchanged.
/// assert_eq!(request.resolve(), "Hello");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct LocalizedString {
    /// Lookup key.
    pub key: String,

    /// Strings table name; `None` selects the default table.
    pub table: Option<String>,

    /// Bundle to search; `None` selects the main bundle.
    pub bundle: Option<Bundle>,

    /// Locale whose resource directories are searched.
    pub locale: Locale,

    /// Translator note carried alongside the key; never consulted by
    /// lookup.
    pub comment: Option<String>,
}

impl LocalizedString {
    /// Look up the key, reporting a miss as `None`.
    ///
    /// Tries each locale candidate's `<candidate>.lproj` directory in
    /// order; a missing directory, table, or key falls through to the next
    /// candidate.
    pub fn lookup(&self) -> Option<String> {
        let bundle = self.bundle.clone().unwrap_or_else(Bundle::main);
        for candidate in self.locale.lookup_candidates() {
            let Some(path) = bundle.path_for_resource(candidate, "lproj") else {
                continue;
            };
            let Some(resources) = Bundle::at_path(&path) else {
                continue;
            };
            if let Some(value) = resources.lookup(&self.key, self.table.as_deref()) {
                return Some(value);
            }
        }
        None
    }

    /// Resolve the key, falling back to the key itself on a miss.
    pub fn resolve(&self) -> String {
        self.lookup().unwrap_or_else(|| self.key.clone())
    }
}
