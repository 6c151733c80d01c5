//! Resource bundles: directories of localized `.strings` resources.
//!
//! A bundle is a plain directory. Language-specific resources live in
//! `<identifier>.lproj` subdirectories, each holding one or more
//! `<table>.strings` files.

use std::env;
use std::path::{Path, PathBuf};

use crate::strings::{LoadError, StringsTable};

/// Name of the strings table used when no table is given.
pub const DEFAULT_TABLE: &str = "Localizable";

/// A resource bundle rooted at a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    /// The main bundle: resources next to the running executable.
    pub fn main() -> Bundle {
        let root = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Bundle { root }
    }

    /// The per-package resource bundle: `$CARGO_MANIFEST_DIR/resources`.
    ///
    /// Cargo sets the variable for `run` and `test`; outside cargo this
    /// falls back to the main bundle.
    pub fn module() -> Bundle {
        match env::var_os("CARGO_MANIFEST_DIR") {
            Some(dir) => Bundle {
                root: PathBuf::from(dir).join("resources"),
            },
            None => Bundle::main(),
        }
    }

    /// Open a bundle at an explicit directory path.
    ///
    /// Returns `None` unless `path` is an existing directory.
    pub fn at_path(path: impl AsRef<Path>) -> Option<Bundle> {
        let path = path.as_ref();
        path.is_dir().then(|| Bundle {
            root: path.to_path_buf(),
        })
    }

    /// The bundle's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate `<name>.<ext>` inside the bundle.
    pub fn path_for_resource(&self, name: &str, ext: &str) -> Option<PathBuf> {
        let candidate = self.root.join(format!("{name}.{ext}"));
        candidate.exists().then_some(candidate)
    }

    /// Load a strings table from this bundle.
    ///
    /// `None` selects the default `Localizable` table.
    pub fn strings_table(&self, table: Option<&str>) -> Result<StringsTable, LoadError> {
        let name = table.unwrap_or(DEFAULT_TABLE);
        StringsTable::load(self.root.join(format!("{name}.strings")))
    }

    /// Look up a key in one of this bundle's tables.
    ///
    /// An unreadable or malformed table reads as a miss.
    pub fn lookup(&self, key: &str, table: Option<&str>) -> Option<String> {
        let table = self.strings_table(table).ok()?;
        table.get(key).map(str::to_string)
    }

    /// Table lookup with default-value fallback.
    ///
    /// Returns the localized value for `key`; when the key cannot be
    /// resolved, returns `value` unless it is empty, in which case the key
    /// itself comes back unchanged. The comment is translator metadata and
    /// is never consulted.
    pub fn localized_string(
        &self,
        key: &str,
        table: Option<&str>,
        value: &str,
        _comment: &str,
    ) -> String {
        match self.lookup(key, table) {
            Some(found) => found,
            None if !value.is_empty() => value.to_string(),
            None => key.to_string(),
        }
    }
}
