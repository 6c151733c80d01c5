//! Preview-host detection for generated code.
//!
//! Live preview renderers launch the program with
//! `LOCPREV_RUNNING_FOR_PREVIEWS=1`. Generated lookups branch on this flag
//! to read `.strings` resources straight from the bundle directory instead
//! of going through the packaged lookup machinery.

use std::env;

/// Environment variable consulted by [`is_preview_host`].
pub const PREVIEW_ENV: &str = "LOCPREV_RUNNING_FOR_PREVIEWS";

/// Returns true when running inside a live preview renderer.
pub fn is_preview_host() -> bool {
    env::var(PREVIEW_ENV).is_ok_and(|value| value == "1")
}
