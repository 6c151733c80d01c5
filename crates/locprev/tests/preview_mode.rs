//! Preview-path behavior of the localize! macro.
//!
//! These assertions mutate the process environment, so they live in a
//! single test function in their own binary to keep the flag away from
//! every other test.

use std::env;
use std::fs;

use locprev::{Bundle, Locale, PREVIEW_ENV, is_preview_host, localize};
use tempfile::TempDir;

fn bundle_with(language: &str, table: &str, content: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let lproj = dir.path().join(format!("{language}.lproj"));
    fs::create_dir_all(&lproj).expect("lproj dir");
    fs::write(lproj.join(format!("{table}.strings")), content).expect("strings file");
    dir
}

#[test]
fn preview_flag_switches_to_the_direct_lookup() {
    assert!(!is_preview_host());

    // SAFETY: this binary runs the single test on one thread.
    unsafe { env::set_var(PREVIEW_ENV, "1") };
    assert!(is_preview_host());

    // Preview path reads the .strings table straight from the lproj
    // directory of the supplied bundle.
    let dir = bundle_with("fr", "Localizable", r#""Hello" = "Bonjour";"#);
    let bundle = Bundle::at_path(dir.path()).expect("bundle");
    let value = localize!("Hello", bundle: bundle, locale: Locale::new("fr"));
    assert_eq!(value, "Bonjour");

    // A named table is honored on the preview path as well.
    let menu_dir = bundle_with("fr", "Menu", r#""Open" = "Ouvrir";"#);
    let menu_bundle = Bundle::at_path(menu_dir.path()).expect("bundle");
    let menu = localize!("Open", table: "Menu", bundle: menu_bundle, locale: Locale::new("fr"));
    assert_eq!(menu, "Ouvrir");

    // Unlike the production path, the preview path does not fall back to
    // the bare language directory: the exact identifier must match.
    let exact_dir = bundle_with("pt", "Localizable", r#""Hello" = "Olá";"#);
    let exact_bundle = Bundle::at_path(exact_dir.path()).expect("bundle");
    let missed = localize!("Hello", bundle: exact_bundle, locale: Locale::new("pt-BR"));
    assert_eq!(missed, "Hello");

    // A preview host without any matching resources returns the key
    // unchanged.
    let empty_dir = TempDir::new().expect("tempdir");
    let empty_bundle = Bundle::at_path(empty_dir.path()).expect("bundle");
    let fallback = localize!("Untranslated", bundle: empty_bundle, locale: Locale::new("fr"));
    assert_eq!(fallback, "Untranslated");

    // Any value other than "1" does not count as a preview host.
    unsafe { env::set_var(PREVIEW_ENV, "true") };
    assert!(!is_preview_host());

    unsafe { env::remove_var(PREVIEW_ENV) };
    assert!(!is_preview_host());
}
