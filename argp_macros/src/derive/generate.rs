//! Token generation for the `Options` impl.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::ext::IdentExt;

use super::StructInfo;

/// Emits `impl Options` reporting one flag per field in declaration order
/// and storing values back by field index.
pub(crate) fn options_impl(
    input: &DeriveInput,
    info: &StructInfo,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let specs = info.fields.iter().enumerate().map(|(index, field)| {
        let member = &field.ident;
        let label = field.ident.unraw().to_string();
        let tag = &field.tag;
        quote! {
            #krate::FlagSpec::from_tag(
                #index,
                #tag,
                #krate::FlagValue::capture(#label, &self.#member)?,
            )?
        }
    });

    let arms = info.fields.iter().enumerate().map(|(index, field)| {
        let member = &field.ident;
        let label = field.ident.unraw().to_string();
        quote! {
            #index => value.store(#label, &mut self.#member),
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Options for #ident #ty_generics #where_clause {
            fn flags(
                &self,
            ) -> ::core::result::Result<::std::vec::Vec<#krate::FlagSpec>, #krate::ArgpError> {
                ::core::result::Result::Ok(::std::vec![#(#specs),*])
            }

            fn assign(
                &mut self,
                index: usize,
                value: #krate::FlagValue,
            ) -> ::core::result::Result<(), #krate::ArgpError> {
                match index {
                    #(#arms)*
                    _ => {
                        ::core::mem::drop(value);
                        ::core::result::Result::Err(#krate::ArgpError::FieldIndex { index })
                    }
                }
            }
        }
    }
}
