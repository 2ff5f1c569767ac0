//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[argp(crate = "...")]` attribute value into the
//! tokens that prefix every `argp` path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the crate path, defaulting to `argp`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { argp }, |path| quote! { #path })
}
