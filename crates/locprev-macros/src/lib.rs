use proc_macro::TokenStream;

mod codegen;
mod extract;
mod input;
mod parse;

/// The localize! macro for preview-aware localized string lookup.
///
/// Takes a string-literal key and optional labeled arguments, and expands
/// to an expression that resolves the key against `.strings` resources.
///
/// # Arguments
///
/// - `table:` — strings table to search (any expression convertible to a
///   table name; defaults to the `Localizable` table)
/// - `bundle:` — bundle to search (defaults to the main bundle; the
///   shorthand `.module` means `::locprev::Bundle::module()`)
/// - `locale:` — locale to resolve for (defaults to the ambient locale;
///   the shorthand `.current` means `::locprev::Locale::current()`)
/// - `comment:` — translator note; must be a string literal
///
/// # Generated Code
///
/// The expansion is a single self-invoking closure over the effective
/// locale. Inside a live preview host (see `locprev::is_preview_host`) it
/// reads the `<identifier>.lproj` strings table straight from the bundle
/// directory; otherwise it goes through `locprev::LocalizedString`.
///
/// # Example
///
/// ```ignore
/// let title = localize!("Hello", bundle: .module, comment: "shown at startup");
/// let greeting = localize!("Hi", table: "Menu", locale: .current);
/// ```
#[proc_macro]
pub fn localize(input: TokenStream) -> TokenStream {
    let invocation = syn::parse_macro_input!(input as input::InvocationArgs);

    let call = match extract::extract(invocation) {
        Ok(call) => call,
        Err(e) => return e.to_compile_error().into(),
    };

    codegen::expand(&call).into()
}
