//! Procedural macros for `argp`.
//!
//! `#[derive(Options)]` turns a struct with named fields into an
//! `argp::Options` registration table: one flag per field, in declaration
//! order, named by the field's `#[argp("name,description")]` tag or, when
//! untagged, by the field identifier.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `argp::Options`.
///
/// Field attribute: `#[argp("name")]` or `#[argp("name,description")]`.
/// Struct attribute: `#[argp(crate = "path")]` to reach `argp` under a
/// renamed dependency.
#[proc_macro_derive(Options, attributes(argp))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
