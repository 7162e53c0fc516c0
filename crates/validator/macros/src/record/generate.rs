//! Code generation for the Record derive

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

use super::parse::FieldAttrs;

/// Generates `impl ::ruletag::Record` for `input`.
///
/// # Errors
///
/// Returns an error if:
/// - Input is not a struct with named fields
/// - A `#[validate(...)]` attribute is malformed
pub(super) fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = require_named_struct(input)?;

    let mut descriptors = Vec::new();
    for field in &fields.named {
        let Some(attrs) = FieldAttrs::from_attributes(&field.attrs)? else {
            continue;
        };
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_name = ident.unraw().to_string();

        let descriptor = if attrs.embedded {
            quote! { ::ruletag::Field::embedded(#field_name, &self.#ident) }
        } else {
            let rules = attrs.rules.iter();
            let code = attrs.code.iter();
            quote! {
                ::ruletag::Field::new(#field_name, &self.#ident)
                    #(.with_rules(#rules))*
                    #(.with_code(#code))*
            }
        };
        descriptors.push(descriptor);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ruletag::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::ruletag::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}

/// Returns the named fields of a struct, or an error spanned on the input.
fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) | Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] requires a struct with named fields",
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "#[derive(Record)] can only be used on structs",
        )),
    }
}
