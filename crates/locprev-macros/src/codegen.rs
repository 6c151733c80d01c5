//! Code emission for the localize! macro.
//!
//! Transforms a validated `LocalizeCall` into the replacement expression: a
//! self-invoking closure over the effective locale that branches between the
//! preview path (direct `.strings` lookup against a bundle directory) and
//! the production path (the locale-aware `LocalizedString` lookup).
//!
//! The two paths default differently when an argument was not supplied:
//!
//! | field   | preview path      | production path         |
//! |---------|-------------------|-------------------------|
//! | table   | `None`            | `None`                  |
//! | bundle  | `Bundle::main()`  | `None`                  |
//! | comment | `""`              | clause omitted entirely |
//!
//! User-supplied `table`/`bundle` expressions appear on both paths, so they
//! are bound exactly once at the top of the closure and shared.

use proc_macro2::TokenStream;
use quote::quote;

use crate::extract::LocalizeCall;

/// Emit the replacement expression for a validated call.
///
/// Total: there is no failure path once extraction has succeeded. The
/// output is a single expression so it can replace the invocation in place.
pub fn expand(call: &LocalizeCall) -> TokenStream {
    let key = &call.key;

    let table_binding = match &call.table {
        Some(expr) => quote! {
            ::core::option::Option::Some(
                ::std::convert::Into::<::std::string::String>::into(#expr)
            )
        },
        None => quote!(::core::option::Option::None),
    };

    let bundle_binding = match &call.bundle {
        Some(expr) => quote!(::core::option::Option::Some(#expr)),
        None => quote!(::core::option::Option::None),
    };

    let preview_comment = match &call.comment {
        Some(lit) => quote!(#lit),
        None => quote!(""),
    };

    // The production path carries a comment clause only when one was
    // written at the call site.
    let production_comment = match &call.comment {
        Some(lit) => quote!(.comment(#lit)),
        None => TokenStream::new(),
    };

    let outer_argument = match &call.locale {
        Some(expr) => quote!(#expr),
        None => quote!(::locprev::Locale::current()),
    };

    quote! {
        (|locale: ::locprev::Locale| -> ::std::string::String {
            let __table: ::core::option::Option<::std::string::String> = #table_binding;
            let __bundle: ::core::option::Option<::locprev::Bundle> = #bundle_binding;

            let __preview_localized_string = |key: &str| -> ::std::string::String {
                let __base = match __bundle.as_ref() {
                    ::core::option::Option::Some(bundle) => bundle.clone(),
                    ::core::option::Option::None => ::locprev::Bundle::main(),
                };
                let ::core::option::Option::Some(__path) =
                    __base.path_for_resource(locale.identifier(), "lproj")
                else {
                    return ::std::string::String::from(key);
                };
                let ::core::option::Option::Some(__resources) =
                    ::locprev::Bundle::at_path(&__path)
                else {
                    return ::std::string::String::from(key);
                };
                __resources.localized_string(key, __table.as_deref(), "", #preview_comment)
            };

            if ::locprev::is_preview_host() {
                __preview_localized_string(#key)
            } else {
                ::locprev::LocalizedString::builder()
                    .key(#key)
                    .maybe_table(__table)
                    .maybe_bundle(__bundle)
                    .locale(locale)
                    #production_comment
                    .build()
                    .resolve()
            }
        })(#outer_argument)
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;
    use crate::extract::extract;
    use crate::input::InvocationArgs;

    /// Expand an argument list and flatten the output for substring checks.
    fn expand_compact(tokens: proc_macro2::TokenStream) -> String {
        let args: InvocationArgs = syn::parse2(tokens).expect("should parse");
        let call = extract(args).expect("should extract");
        expand(&call).to_string().split_whitespace().collect()
    }

    #[test]
    fn bare_key_uses_both_paths_defaults() {
        let expanded = expand_compact(quote! { "Hello" });

        // Preview path: main bundle, no table, empty comment.
        assert!(expanded.contains("::locprev::Bundle::main()"));
        assert!(expanded.contains(r#"localized_string(key,__table.as_deref(),"","")"#));

        // Production path: table and bundle explicitly absent, comment
        // clause omitted entirely.
        assert!(expanded.contains(".maybe_table(__table)"));
        assert!(expanded.contains(".maybe_bundle(__bundle)"));
        assert!(expanded.contains("=::core::option::Option::None;"));
        assert!(!expanded.contains(".comment("));

        // Outer invocation applies the ambient locale.
        assert!(expanded.ends_with("})(::locprev::Locale::current())"));
    }

    #[test]
    fn emitted_output_is_a_single_expression() {
        let args: InvocationArgs = syn::parse2(quote! { "Hello" }).expect("should parse");
        let call = extract(args).expect("should extract");
        let expanded = expand(&call);
        syn::parse2::<syn::Expr>(expanded).expect("expansion should be one expression");
    }

    #[test]
    fn supplied_arguments_reach_both_paths() {
        let expanded = expand_compact(quote! {
            "Hi", bundle: .module, locale: .current, comment: "note"
        });

        // Desugared bundle is bound once and shared.
        assert!(
            expanded
                .contains("::core::option::Option::Some(::locprev::Bundle::module())")
        );

        // Production path now carries the comment clause.
        assert!(expanded.contains(r#".comment("note")"#));
        // Preview path passes the comment through as the final argument.
        assert!(expanded.contains(r#"localized_string(key,__table.as_deref(),"","note")"#));

        // Outer invocation applies the desugared locale argument.
        assert!(expanded.ends_with("})(::locprev::Locale::current())"));
    }

    #[test]
    fn supplied_table_is_converted_once() {
        let expanded = expand_compact(quote! { "Hi", table: "Menu" });
        assert!(
            expanded.contains(
                r#"::std::convert::Into::<::std::string::String>::into("Menu")"#
            )
        );
        assert!(expanded.contains(".maybe_table(__table)"));
    }

    #[test]
    fn explicit_locale_expression_feeds_the_invocation() {
        let expanded = expand_compact(quote! { "Hi", locale: my_locale });
        assert!(expanded.ends_with("})(my_locale)"));
    }

    #[test]
    fn preview_branch_guards_on_the_environment_check() {
        let expanded = expand_compact(quote! { "Hello" });
        assert!(expanded.contains("if::locprev::is_preview_host()"));
        assert!(expanded.contains(r#"__preview_localized_string("Hello")"#));
    }
}
