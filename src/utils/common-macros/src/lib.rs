// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse_macro_input;
use syn::spanned::Spanned;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// #[method_names_consts]
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generates a `{Type}_{method}` string constant for every method of an
/// `impl` block, so that tracing spans can carry the type name:
///
/// ```compile_fail
/// #[method_names_consts]
/// impl SearchSynchronizationServiceImpl {
///     // Span is named "SearchSynchronizationServiceImpl::sync_all_brands"
///     #[tracing::instrument(
///         level = "info",
///         name = SearchSynchronizationServiceImpl_sync_all_brands,
///         skip_all
///     )]
///     pub async fn sync_all_brands(&self) -> Result<usize, SyncError> { /* ... */ }
/// }
/// ```
///
/// The constants are emitted next to the `impl` block, so two `impl` blocks
/// of one type must not share method names.
#[proc_macro_attribute]
pub fn method_names_consts(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as syn::ItemImpl);

    let type_name = match input.self_ty.as_ref() {
        syn::Type::Path(type_path) => match type_path.path.segments.last() {
            Some(segment) => segment.ident.to_string(),
            None => return error(&input.self_ty, "expected a named type"),
        },
        other => {
            return error(
                other,
                "[method_names_consts] can be applied only to `impl <Type> {}` blocks",
            );
        }
    };

    let name_consts: Vec<_> = input
        .items
        .iter()
        .filter_map(|item| match item {
            syn::ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
            _ => None,
        })
        .map(|method_name| {
            let const_ident = format_ident!("{type_name}_{method_name}");
            let const_value = format!("{type_name}::{method_name}");

            quote! {
                #[allow(dead_code)]
                #[allow(non_upper_case_globals)]
                const #const_ident: &str = #const_value;
            }
        })
        .collect();

    if name_consts.is_empty() {
        return error(
            &input.self_ty,
            &format!("[method_names_consts]: `{type_name}` has no methods"),
        );
    }

    TokenStream::from(quote! {
        #input

        #(#name_consts)*
    })
}

fn error(at: &impl Spanned, message: &str) -> TokenStream {
    syn::Error::new(at.span(), message)
        .to_compile_error()
        .into()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
