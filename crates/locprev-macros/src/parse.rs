//! Parse implementations for the localize! argument list.
//!
//! Implements syn::parse::Parse for the AST types defined in input.rs.
//! Parsing is deliberately permissive: labels are arbitrary identifiers and
//! values are arbitrary expressions (or the leading-dot shorthand), so that
//! the extractor owns all validation decisions.

use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, Token};

use crate::input::{ArgValue, InvocationArgs, RawArg, Shorthand};

impl Parse for InvocationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = Vec::new();
        while !input.is_empty() {
            args.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(InvocationArgs { args })
    }
}

impl Parse for RawArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // A lone `:` marks a label; `::` would be the start of a path
        // expression.
        let label = if input.peek(Ident) && input.peek2(Token![:]) && !input.peek2(Token![::]) {
            let ident: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            Some(ident)
        } else {
            None
        };

        let value: ArgValue = input.parse()?;
        Ok(RawArg { label, value })
    }
}

impl Parse for ArgValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![.]) && input.peek2(Ident) {
            Ok(ArgValue::Shorthand(input.parse()?))
        } else {
            Ok(ArgValue::Expr(input.parse()?))
        }
    }
}

impl Parse for Shorthand {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![.]>()?;
        let member: Ident = input.parse()?;

        let args = if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            Some(content.parse_terminated(Expr::parse, Token![,])?)
        } else {
            None
        };

        Ok(Shorthand { member, args })
    }
}
