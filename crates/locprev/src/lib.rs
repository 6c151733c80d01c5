pub mod bundle;
pub mod locale;
pub mod lookup;
pub mod preview;
pub mod strings;
mod suggest;

pub use bundle::{Bundle, DEFAULT_TABLE};
pub use locale::{InvalidLocale, Locale};
pub use lookup::LocalizedString;
pub use preview::{PREVIEW_ENV, is_preview_host};
pub use strings::{LoadError, ParseError, StringsTable};
pub use suggest::compute_suggestions;

// Re-export the localize! macro
pub use locprev_macros::localize;
