//! Expansion of `#[derive(Options)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) use parse::{StructInfo, parse_input};

/// Expands the derive input into an `Options` impl.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let info = parse_input(input)?;
    let krate = crate_path::resolve(info.crate_path.as_ref());
    Ok(generate::options_impl(input, &info, &krate))
}
