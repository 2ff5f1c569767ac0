//! Input parsing for the `Options` derive macro.
//!
//! Collects the struct's named fields with their tags in one pass and
//! validates the tags eagerly, so a malformed tag is a compile error that
//! points at the attribute rather than a runtime failure.

use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// A field to register as a flag.
pub(crate) struct FieldInfo {
    pub ident: Ident,
    /// Tag text handed to the runtime, `name` or `name,description`.
    pub tag: String,
}

/// Everything the generator needs from the input struct.
pub(crate) struct StructInfo {
    pub fields: Vec<FieldInfo>,
    /// Overrides the `argp` path in generated code.
    pub crate_path: Option<syn::Path>,
}

/// Gathers fields and attributes from the derive input.
///
/// Only structs with named fields are accepted: anything else has no field
/// names to bind flags onto.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<StructInfo> {
    let crate_path = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => return Ok(StructInfo { fields: Vec::new(), crate_path }),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Options requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Options can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Options requires named fields"));
        };
        let tag = match field_tag(&field.attrs)? {
            Some(lit) => {
                validate_tag(&lit.value()).map_err(|reason| syn::Error::new(lit.span(), reason))?;
                lit.value()
            }
            None => ident.unraw().to_string(),
        };
        fields.push(FieldInfo { ident, tag });
    }
    reject_duplicate_names(&fields, named)?;
    Ok(StructInfo { fields, crate_path })
}

/// Extracts `#[argp(crate = "...")]` from the struct attributes.
fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<Option<syn::Path>> {
    let mut crate_path = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("argp")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                let path = syn::parse_str::<syn::Path>(&lit.value())
                    .map_err(|err| syn::Error::new(lit.span(), err))?;
                crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unknown argp struct attribute; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(crate_path)
}

/// Returns the string literal of the field's `#[argp("...")]` attribute.
fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("argp")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate argp attribute"));
        }
        found = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(found)
}

/// Mirrors the runtime tag grammar: `name` or `name,description`.
pub(crate) fn validate_tag(tag: &str) -> Result<(), &'static str> {
    let (name, description) = tag.split_once(',').unwrap_or((tag, ""));
    if description.contains(',') {
        return Err("argp tag must be \"name\" or \"name,description\"; found more than one comma");
    }
    if name.is_empty() {
        return Err("argp tag has an empty flag name");
    }
    if name.starts_with('-') {
        return Err("argp flag names are written without leading dashes");
    }
    if name.contains('=') {
        return Err("argp flag names cannot contain `=`");
    }
    Ok(())
}

fn flag_name(tag: &str) -> &str {
    tag.split_once(',').map_or(tag, |(name, _)| name)
}

fn reject_duplicate_names(
    fields: &[FieldInfo],
    named: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
) -> syn::Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for (info, field) in fields.iter().zip(named) {
        let name = flag_name(&info.tag);
        if !seen.insert(name) {
            return Err(syn::Error::new_spanned(
                field,
                format!("flag name `{name}` is used by more than one field"),
            ));
        }
    }
    Ok(())
}
