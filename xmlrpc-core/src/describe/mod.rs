//! Descriptions of Rust types.
//!
//! This module provides the [`Describe`] trait, the adapter between Rust's type system and
//! [`TypeDescriptor`], along with its implementations for standard Rust types.
//!
//! # Mapping
//!
//! - `i32`, `i64`, `bool`, `f64` and string types map to their primitive counterparts, `()` to
//!   void and `std::time::SystemTime` to date and time. Other numeric types and `char` have no
//!   counterpart.
//! - `Option<T>` is nullable, while smart pointers, cells and references are transparent.
//! - `Vec<T>`, slices and fixed-size arrays are single-dimensional arrays, which makes `Vec<u8>`
//!   a byte sequence.
//! - Hash and B-tree maps are maps. Sets, deques, linked lists and heaps are sequences.
//! - `serde_json::Value` is the universal type and `serde_json::Map` the generic struct.
//! - Structs can derive their description with the `Describe` derive macro.

use crate::descriptor::TypeDescriptor;

/// Type description.
///
/// Implementing this trait lets a Rust type take part in wire type classification.
///
/// # Usage
///
/// For structs, use the `Describe` derive macro:
///
/// ```ignore
/// use xmlrpc::Describe;
///
/// #[derive(Describe)]
/// struct Order {
///     id: i32,
///     items: Vec<String>,
///     parent: Option<Box<Order>>,
/// }
/// ```
pub trait Describe {
    /// The type descriptor.
    const DESCRIPTOR: &'static TypeDescriptor<'static>;
}

pub use xmlrpc_macros::Describe;

/// The descriptor of `T`.
///
/// Mostly useful as a function pointer for deferred type references.
pub fn descriptor_of<T: Describe + ?Sized>() -> &'static TypeDescriptor<'static> {
    T::DESCRIPTOR
}

// Implements `Describe` for a list of types sharing the same descriptor.
macro_rules! impl_describe {
    ($($ty:ty),+ => $descriptor:expr) => {
        $(
            impl $crate::describe::Describe for $ty {
                const DESCRIPTOR: &'static $crate::descriptor::TypeDescriptor<'static> =
                    &$descriptor;
            }
        )+
    };
}

// Implements `Describe` for types with no counterpart, named after the type.
macro_rules! impl_unsupported {
    ($($ty:ty),+) => {
        $(
            impl_describe!($ty => $crate::descriptor::TypeDescriptor::Unsupported(stringify!($ty)));
        )+
    };
}

mod collections;
mod external;
mod primitives;
mod special;
mod wrappers;
