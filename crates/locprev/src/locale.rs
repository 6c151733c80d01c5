//! Locale identifiers and ambient-locale detection.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A locale identifier such as `en` or `pt-BR`.
///
/// # Example
///
/// ```
/// use locprev::Locale;
///
/// let locale = Locale::try_new("pt-br").unwrap();
/// assert_eq!(locale.identifier(), "pt-BR");
/// assert_eq!(locale.language(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    identifier: String,
}

/// Error returned when a locale identifier fails validation.
#[derive(Debug, Error)]
#[error("invalid locale identifier '{identifier}'")]
pub struct InvalidLocale {
    identifier: String,
    #[source]
    source: icu_locale_core::ParseError,
}

impl Locale {
    /// Create a locale from an identifier, stored as given.
    ///
    /// No validation is performed; use [`Locale::try_new`] to validate and
    /// canonicalize.
    pub fn new(identifier: impl Into<String>) -> Locale {
        Locale {
            identifier: identifier.into(),
        }
    }

    /// Create a validated, canonicalized locale.
    pub fn try_new(identifier: &str) -> Result<Locale, InvalidLocale> {
        let parsed =
            icu_locale_core::Locale::try_from_str(identifier).map_err(|e| InvalidLocale {
                identifier: identifier.to_string(),
                source: e,
            })?;
        Ok(Locale {
            identifier: parsed.to_string(),
        })
    }

    /// The ambient locale of the current process.
    ///
    /// Reads `LC_ALL`, `LC_MESSAGES`, then `LANG`, stripping any encoding
    /// or modifier suffix (`en_US.UTF-8` becomes `en-US`). Falls back to
    /// `en` when nothing usable is set.
    pub fn current() -> Locale {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .filter(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .find_map(|value| Locale::try_new(&normalize_posix(&value)).ok())
            .unwrap_or_else(|| Locale::new("en"))
    }

    /// The full identifier, e.g. `pt-BR`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The primary language subtag, e.g. `pt` for `pt-BR`.
    pub fn language(&self) -> &str {
        self.identifier.split('-').next().unwrap_or("")
    }

    /// Resource-directory candidates, most specific first.
    ///
    /// `pt-BR` yields `["pt-BR", "pt"]`; a bare language yields itself
    /// once.
    pub fn lookup_candidates(&self) -> Vec<&str> {
        let mut candidates = vec![self.identifier()];
        let language = self.language();
        if language != self.identifier() {
            candidates.push(language);
        }
        candidates
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.identifier)
    }
}

/// Strip POSIX encoding/modifier suffixes and map `_` to `-`.
fn normalize_posix(value: &str) -> String {
    let base = value.split(['.', '@']).next().unwrap_or(value);
    base.replace('_', "-")
}
