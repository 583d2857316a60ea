//! Derive macro for tagrule records.
//!
//! # Usage
//!
//! ```ignore
//! use tagrule_engine::{Record, Validator};
//!
//! #[derive(Record)]
//! struct User {
//!     #[tag("required,min=2,max=32")]
//!     name: String,
//!     #[tag("each={min=1,max=23}")]
//!     logins: Vec<String>,
//! }
//! ```
//!
//! The generated `AsValue` impl exposes every field, in declaration order,
//! with its name, its raw `#[tag("...")]` annotation, and its value view.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericParam, LitStr, parse_macro_input,
    parse_quote, spanned::Spanned,
};

/// Name of the helper attribute carrying a field annotation.
const TAG_ATTRIBUTE: &str = "tag";

/// Derives `tagrule_engine::AsValue` for a struct.
///
/// Each field may carry at most one `#[tag("...")]` attribute whose argument
/// is a string literal. Every field type must implement `AsValue`.
///
/// # Errors
///
/// Compile-time errors are emitted when:
/// - the item is an enum or union
/// - a `tag` attribute is not a single string literal
/// - a field carries more than one `tag` attribute
#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs",
        ));
    };

    let fields = field_views(&data.fields)?;
    let ident = &input.ident;
    let record_name = ident.to_string();

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::tagrule_engine::AsValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tagrule_engine::AsValue for #ident #ty_generics #where_clause {
            fn as_value(&self) -> ::tagrule_engine::Value<'_> {
                ::tagrule_engine::Value::Record(::tagrule_engine::RecordView {
                    name: #record_name,
                    fields: ::std::vec![#(#fields),*],
                })
            }
        }
    })
}

fn field_views(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (name, access) = match &field.ident {
                Some(ident) => {
                    let name = ident.to_string();
                    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
                    (name, quote!(#ident))
                }
                None => {
                    let member = syn::Index::from(index);
                    (index.to_string(), quote!(#member))
                }
            };
            let annotation = match field_tag(&field.attrs)? {
                Some(tag) => quote!(::core::option::Option::Some(#tag)),
                None => quote!(::core::option::Option::None),
            };
            Ok(quote! {
                ::tagrule_engine::Field {
                    name: #name,
                    annotation: #annotation,
                    value: ::tagrule_engine::AsValue::as_value(&self.#access),
                }
            })
        })
        .collect()
}

/// Returns the string literal of the field's `tag` attribute, if any.
fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;
    for attr in attrs {
        if !attr.path().is_ident(TAG_ATTRIBUTE) {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "duplicate `tag` attribute; combine annotations with commas",
            ));
        }
        let literal: LitStr = attr.parse_args().map_err(|e| {
            syn::Error::new(e.span(), "expected a string literal: #[tag(\"min=1\")]")
        })?;
        found = Some(literal);
    }
    Ok(found)
}
