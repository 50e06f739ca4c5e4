use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, GenericParam, Ident};

use crate::utils;

/// Main entry point for the Describe derive macro.
pub(crate) fn derive_describe(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_describe_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_describe_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let crate_path = utils::parse_crate_path(&input.attrs)?;

    // Member statics can't depend on type parameters.
    if let Some(param) = input
        .generics
        .params
        .iter()
        .find(|param| !matches!(param, GenericParam::Lifetime(_)))
    {
        return Err(Error::new_spanned(
            param,
            "Describe derive macro does not support type or const parameters",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Describe derive macro only supports structs, enums have no XML-RPC \
                 representation",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Describe derive macro only supports structs, not unions",
            ));
        }
    };
    let (member_statics, member_refs) = generate_member_definitions(name, fields, &crate_path)?;
    let type_name = name.to_string();

    Ok(quote! {
        impl #impl_generics #crate_path::Describe for #name #ty_generics #where_clause {
            const DESCRIPTOR: &'static #crate_path::descriptor::TypeDescriptor<'static> = &{
                #(#member_statics)*

                static MEMBER_REFS: &[&#crate_path::descriptor::Member<'static>] = &[
                    #(#member_refs),*
                ];

                #crate_path::descriptor::TypeDescriptor::Composite(
                    #crate_path::descriptor::Composite::new(
                        ::core::concat!(::core::module_path!(), "::", #type_name),
                        MEMBER_REFS,
                    )
                )
            };
        }
    })
}

/// Generate a static member definition per field, along with references to them.
///
/// Member types are deferred so that a struct can refer to itself.
fn generate_member_definitions(
    name: &Ident,
    fields: &Fields,
    crate_path: &TokenStream2,
) -> Result<(Vec<TokenStream2>, Vec<TokenStream2>), Error> {
    let mut member_statics = Vec::new();
    let mut member_refs = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        if utils::is_skipped(&field.attrs)? {
            continue;
        }

        // Tuple struct fields are named after their position.
        let member_name = match &field.ident {
            Some(ident) => ident.to_string(),
            None => index.to_string(),
        };
        let field_type = utils::static_field_type(&field.ty, name);
        let static_name = format_ident!("MEMBER_{}", index);

        member_statics.push(quote! {
            static #static_name: #crate_path::descriptor::Member<'static> =
                #crate_path::descriptor::Member::deferred(
                    #member_name,
                    #crate_path::describe::descriptor_of::<#field_type>,
                );
        });
        member_refs.push(quote! { &#static_name });
    }

    Ok((member_statics, member_refs))
}
