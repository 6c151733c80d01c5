//! Internal AST types for the localize! macro.
//!
//! These types hold the raw argument list exactly as written at the call
//! site; validation and desugaring happen later, in extract.rs.

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, Token};

/// The full argument list of one `localize!` invocation, in source order.
pub struct InvocationArgs {
    pub args: Vec<RawArg>,
}

/// One argument: an optional `label:` followed by a value.
pub struct RawArg {
    pub label: Option<Ident>,
    pub value: ArgValue,
}

impl RawArg {
    /// Span for diagnostics: the label when present, the value otherwise.
    pub fn span(&self) -> Span {
        match &self.label {
            Some(label) => label.span(),
            None => self.value.span(),
        }
    }
}

/// An argument value.
///
/// The leading-dot shorthand (`.module`, `.current`) is not a valid
/// `syn::Expr`, so it gets its own shape here and is desugared during
/// extraction.
pub enum ArgValue {
    Expr(Expr),
    Shorthand(Shorthand),
}

impl ArgValue {
    pub fn span(&self) -> Span {
        match self {
            ArgValue::Expr(expr) => expr.span(),
            ArgValue::Shorthand(shorthand) => shorthand.member.span(),
        }
    }
}

/// A member access with no explicit receiver: `.member` or `.member(args)`.
pub struct Shorthand {
    pub member: Ident,
    pub args: Option<Punctuated<Expr, Token![,]>>,
}
