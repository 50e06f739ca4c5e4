#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod describe;
mod utils;

/// Derives `Describe` for structs, generating a composite type descriptor.
///
/// Every field becomes a member of the composite, in declaration order. Fields of tuple structs
/// are named after their position and unit structs have no members. The composite is named after
/// the module path and name of the struct.
///
/// # Attributes
///
/// - `#[xmlrpc(crate = "path")]` on the struct: the path of the `xmlrpc` crate, `::xmlrpc` by
///   default.
/// - `#[xmlrpc(skip)]` on a field: leaves the field out of the description.
///
/// # Limitations
///
/// The following are **not** supported by this macro:
///
/// - **Enums**: XML-RPC has no enumerated types
/// - **Unions**
/// - **Type and const parameters**: lifetime parameters are fine
///
/// ```rust,compile_fail
/// # use xmlrpc::Describe;
/// #[derive(Describe)] // This will fail to compile
/// enum Color {
///     Red,
///     Green,
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use xmlrpc::{wire_type, Describe, WireType};
///
/// #[derive(Describe)]
/// struct Person {
///     name: String,
///     age: i32,
///     photo: Option<Vec<u8>>,
/// }
///
/// let composite = Person::DESCRIPTOR.as_composite().unwrap();
/// let members: Vec<_> = composite.members().map(|member| member.name()).collect();
/// assert_eq!(members, ["name", "age", "photo"]);
/// assert_eq!(wire_type::<Person>(), WireType::Struct);
/// ```
///
/// ## Recursive Types
///
/// ```rust
/// # use xmlrpc::{wire_type, Describe, WireType};
/// #[derive(Describe)]
/// struct Category {
///     name: String,
///     parent: Option<Box<Category>>,
///     children: Vec<Category>,
/// }
///
/// assert_eq!(wire_type::<Category>(), WireType::Struct);
/// ```
///
/// ## Skipped Fields
///
/// ```rust
/// # use xmlrpc::{wire_type, Describe, WireType};
/// #[derive(Describe)]
/// struct Session {
///     user: String,
///     // `u64` has no XML-RPC representation.
///     #[xmlrpc(skip)]
///     nonce: u64,
/// }
///
/// assert_eq!(wire_type::<Session>(), WireType::Struct);
/// ```
#[proc_macro_derive(Describe, attributes(xmlrpc))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input)
}
