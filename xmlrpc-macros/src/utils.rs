use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    visit_mut::{self, VisitMut},
    Attribute, Error, Ident, Lifetime, LitStr, Type,
};

/// Parse the crate path from attributes, defaulting to `::xmlrpc`.
///
/// Looks for `#[xmlrpc(crate = "...")]` attribute and uses the specified crate path.
///
/// # Examples
///
/// ```ignore
/// #[derive(Describe)]
/// #[xmlrpc(crate = "xmlrpc_core")]
/// struct MyStruct;
/// ```
pub(crate) fn parse_crate_path(attrs: &[Attribute]) -> Result<TokenStream2, Error> {
    let mut crate_path = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("xmlrpc")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit_str: LitStr = meta.value()?.parse()?;
                crate_path = Some(lit_str.parse::<syn::Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported `xmlrpc` attribute, expected `crate`"))
            }
        })?;
    }

    Ok(match crate_path {
        Some(path) => quote! { #path },
        None => quote! { ::xmlrpc },
    })
}

/// Whether a field carries `#[xmlrpc(skip)]`.
pub(crate) fn is_skipped(attrs: &[Attribute]) -> Result<bool, Error> {
    let mut skipped = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("xmlrpc")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported `xmlrpc` field attribute, expected `skip`"))
            }
        })?;
    }

    Ok(skipped)
}

/// Rewrites a field type so that it can be named from a static nested in the derived impl.
///
/// Such statics can't refer to the generics of the outer impl, so all named lifetimes except
/// `'static` become `'_` and `Self` is replaced by the name of the type.
pub(crate) fn static_field_type(ty: &Type, self_ident: &Ident) -> Type {
    let mut ty = ty.clone();
    StaticFieldType { self_ident }.visit_type_mut(&mut ty);

    ty
}

struct StaticFieldType<'i> {
    self_ident: &'i Ident,
}

impl VisitMut for StaticFieldType<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(type_path) = ty {
            if type_path.qself.is_none() && type_path.path.is_ident("Self") {
                let ident = self.self_ident;
                *ty = syn::parse_quote! { #ident };
                return;
            }
        }

        visit_mut::visit_type_mut(self, ty);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident != "static" {
            *lifetime = Lifetime::new("'_", lifetime.apostrophe);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    fn elided(ty: &str) -> String {
        let ty: Type = syn::parse_str(ty).unwrap();
        let self_ident = Ident::new("Node", proc_macro2::Span::call_site());
        static_field_type(&ty, &self_ident).to_token_stream().to_string()
    }

    #[test]
    fn lifetimes_are_elided() {
        assert_eq!(elided("&'a str"), "& '_ str");
        assert_eq!(elided("Cow<'a, [u8]>"), "Cow < '_ , [u8] >");
        assert_eq!(elided("Option<&'b Vec<&'c str>>"), "Option < & '_ Vec < & '_ str > >");
        assert_eq!(elided("&'static str"), "& 'static str");
        assert_eq!(elided("Vec<i32>"), "Vec < i32 >");
    }

    #[test]
    fn self_is_replaced() {
        assert_eq!(elided("Self"), "Node");
        assert_eq!(elided("Option<Box<Self>>"), "Option < Box < Node > >");
        assert_eq!(elided("Vec<Self>"), "Vec < Node >");
    }

    #[test]
    fn crate_path() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[xmlrpc(crate = "crate")]
            struct Foo;
        };
        assert_eq!(parse_crate_path(&input.attrs).unwrap().to_string(), "crate");

        let input: syn::DeriveInput = syn::parse_quote! {
            struct Foo;
        };
        assert_eq!(parse_crate_path(&input.attrs).unwrap().to_string(), ":: xmlrpc");

        let input: syn::DeriveInput = syn::parse_quote! {
            #[xmlrpc(rename = "foo")]
            struct Foo;
        };
        assert!(parse_crate_path(&input.attrs).is_err());
    }
}
