//! Argument extraction and validation for the localize! macro.
//!
//! Consumes the raw argument list as a queue, front to back:
//! the first argument is the required string-literal key, every later
//! argument is dispatched on its label. Duplicate labels follow
//! last-write-wins semantics because the queue is drained once,
//! sequentially. Unrecognized labels are dropped without a diagnostic.

use std::collections::VecDeque;

use proc_macro2::Span;
use syn::{Expr, ExprLit, Ident, Lit, LitStr, parse_quote};

use crate::input::{ArgValue, InvocationArgs, RawArg, Shorthand};

/// A validated invocation, ready for code emission.
#[derive(Debug)]
pub struct LocalizeCall {
    pub key: LitStr,
    pub table: Option<Expr>,
    pub bundle: Option<Expr>,
    pub locale: Option<Expr>,
    pub comment: Option<LitStr>,
}

/// Validate the argument list and build a `LocalizeCall`.
///
/// Fails fast on the first violation; each error carries the span of the
/// offending tokens and a fixed message.
pub fn extract(invocation: InvocationArgs) -> syn::Result<LocalizeCall> {
    let mut queue: VecDeque<RawArg> = invocation.args.into();

    let Some(first) = queue.pop_front() else {
        return Err(syn::Error::new(
            Span::call_site(),
            "Missing localization key",
        ));
    };
    let key = key_literal(first)?;

    let mut table = None;
    let mut bundle = None;
    let mut locale = None;
    let mut comment = None;

    while let Some(arg) = queue.pop_front() {
        let Some(label) = &arg.label else {
            continue;
        };
        match label.to_string().as_str() {
            "table" => table = Some(verbatim(arg.value)?),
            "bundle" => bundle = Some(desugar(arg.value, "Bundle")),
            "locale" => locale = Some(desugar(arg.value, "Locale")),
            "comment" => comment = Some(comment_literal(arg.value)?),
            _ => {}
        }
    }

    Ok(LocalizeCall {
        key,
        table,
        bundle,
        locale,
        comment,
    })
}

/// The key must be positional (no label) and a string literal.
fn key_literal(arg: RawArg) -> syn::Result<LitStr> {
    let span = arg.span();
    if let RawArg {
        label: None,
        value: ArgValue::Expr(Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        })),
    } = arg
    {
        Ok(lit)
    } else {
        Err(syn::Error::new(
            span,
            "Localization key must be a string literal",
        ))
    }
}

/// `table` stores its expression verbatim; the leading-dot shorthand has no
/// implicit base in this position.
fn verbatim(value: ArgValue) -> syn::Result<Expr> {
    match value {
        ArgValue::Expr(expr) => Ok(expr),
        ArgValue::Shorthand(shorthand) => Err(syn::Error::new(
            shorthand.member.span(),
            "shorthand arguments are only supported for `bundle` and `locale`",
        )),
    }
}

/// Rewrite a receiver-less member access onto its implicit base type.
///
/// `.module` becomes `::locprev::Bundle::module()`; an expression that
/// already carries a receiver passes through unchanged.
fn desugar(value: ArgValue, base: &str) -> Expr {
    match value {
        ArgValue::Expr(expr) => expr,
        ArgValue::Shorthand(Shorthand { member, args }) => {
            let base = Ident::new(base, member.span());
            match args {
                Some(args) => parse_quote!(::locprev::#base::#member(#args)),
                None => parse_quote!(::locprev::#base::#member()),
            }
        }
    }
}

/// `comment` must statically be a string literal.
fn comment_literal(value: ArgValue) -> syn::Result<LitStr> {
    let span = value.span();
    if let ArgValue::Expr(Expr::Lit(ExprLit {
        lit: Lit::Str(lit), ..
    })) = value
    {
        Ok(lit)
    } else {
        Err(syn::Error::new(span, "Comment must be a string literal"))
    }
}
