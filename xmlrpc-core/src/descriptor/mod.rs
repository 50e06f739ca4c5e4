//! Descriptions of host types.
//!
//! A [`TypeDescriptor`] is a read-only view of a host type, exposing exactly what the classifier
//! needs: the primitive kind, the element type and rank of arrays, whether the type behaves as a
//! map or a sequence and, for composite types, the types of their members. Any host type system
//! can be adapted into it. For Rust types, see the [`Describe`](crate::Describe) trait.

#![deny(missing_docs)]

mod list;
pub use list::List;

mod type_ref;
pub use type_ref::TypeRef;

mod array;
pub use array::ArrayType;

mod composite;
pub use composite::{Composite, Member};

use alloc::vec::Vec;
use core::{fmt, ptr};

/// A description of a host type.
#[derive(Debug, Clone, Eq)]
pub enum TypeDescriptor<'a> {
    /// A primitive type.
    Primitive(Primitive),
    /// An optional/nullable wrapper around another type.
    Nullable(TypeRef<'a>),
    /// The universal type, standing for any value.
    Any,
    /// The generic struct type, a struct with arbitrary members decided at runtime.
    StructLiteral,
    /// The untyped array type, an array whose elements are decided at runtime.
    UntypedArray,
    /// A typed array.
    Array(ArrayType<'a>),
    /// A key-value mapping, with the given host name.
    ///
    /// Map-like types are usually iterable as well, so a type that is both is a `Map`.
    Map(&'a str),
    /// An ordered or iterable collection that is neither an array nor a map, with the given host
    /// name.
    Sequence(&'a str),
    /// A record type, described by its members.
    Composite(Composite<'a>),
    /// A host type with no counterpart in this model, with the given host name.
    Unsupported(&'a str),
}

/// Primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Boolean.
    Boolean,
    /// String.
    String,
    /// Double-precision floating point.
    Double,
    /// Date and time.
    DateTime,
    /// A single byte.
    ///
    /// Bytes only have a wire representation as part of a byte sequence, i.e. a single-dimensional
    /// array of bytes.
    Byte,
    /// The absence of a value.
    Void,
}

impl TypeDescriptor<'static> {
    /// The 32-bit integer type.
    pub const INT32: &'static Self = &TypeDescriptor::Primitive(Primitive::Int32);
    /// The 64-bit integer type.
    pub const INT64: &'static Self = &TypeDescriptor::Primitive(Primitive::Int64);
    /// The boolean type.
    pub const BOOLEAN: &'static Self = &TypeDescriptor::Primitive(Primitive::Boolean);
    /// The string type.
    pub const STRING: &'static Self = &TypeDescriptor::Primitive(Primitive::String);
    /// The double type.
    pub const DOUBLE: &'static Self = &TypeDescriptor::Primitive(Primitive::Double);
    /// The date and time type.
    pub const DATE_TIME: &'static Self = &TypeDescriptor::Primitive(Primitive::DateTime);
    /// The byte type.
    pub const BYTE: &'static Self = &TypeDescriptor::Primitive(Primitive::Byte);
    /// The void type.
    pub const VOID: &'static Self = &TypeDescriptor::Primitive(Primitive::Void);
    /// The universal type.
    pub const ANY: &'static Self = &TypeDescriptor::Any;
    /// The byte sequence type.
    pub const BYTES: &'static Self = &TypeDescriptor::Array(ArrayType::new(Self::BYTE, 1));
}

impl<'a> TypeDescriptor<'a> {
    /// Whether this is the universal type.
    pub fn is_any(&self) -> bool {
        matches!(self, TypeDescriptor::Any)
    }

    /// The primitive kind, if this is a primitive type.
    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            TypeDescriptor::Primitive(primitive) => Some(*primitive),
            _ => None,
        }
    }

    /// The array type, if this is a typed array.
    pub fn as_array(&self) -> Option<&ArrayType<'a>> {
        match self {
            TypeDescriptor::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The composite type, if this is a record type.
    pub fn as_composite(&self) -> Option<&Composite<'a>> {
        match self {
            TypeDescriptor::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    /// Whether following nullable and array wrappers from this type leads back to one of them.
    ///
    /// Such a chain never reaches a concrete type. It can only be built by hand, through
    /// [`TypeRef::deferred`] or self-referencing statics. Wrappers are compared by address.
    pub fn wraps_itself(&self) -> bool {
        let mut passed: Vec<&TypeDescriptor<'a>> = Vec::new();
        let mut current = self;
        loop {
            let next = match current {
                TypeDescriptor::Nullable(inner) => inner.inner(),
                TypeDescriptor::Array(array) if !array.is_bytes() => array.element(),
                _ => return false,
            };
            if passed.iter().any(|wrapper| ptr::eq(*wrapper, current)) {
                return true;
            }
            passed.push(current);
            current = next;
        }
    }
}

impl fmt::Display for TypeDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Nullable(_) | TypeDescriptor::Array(_) if self.wraps_itself() => {
                write!(f, "...")
            }
            TypeDescriptor::Primitive(primitive) => write!(f, "{primitive}"),
            TypeDescriptor::Nullable(inner) => write!(f, "{inner}?"),
            TypeDescriptor::Any => write!(f, "any"),
            TypeDescriptor::StructLiteral => write!(f, "struct"),
            TypeDescriptor::UntypedArray => write!(f, "array"),
            TypeDescriptor::Array(array) => write!(f, "{array}"),
            TypeDescriptor::Map(name)
            | TypeDescriptor::Sequence(name)
            | TypeDescriptor::Unsupported(name) => write!(f, "{name}"),
            TypeDescriptor::Composite(composite) => write!(f, "{}", composite.name()),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Boolean => "bool",
            Primitive::String => "string",
            Primitive::Double => "double",
            Primitive::DateTime => "datetime",
            Primitive::Byte => "byte",
            Primitive::Void => "void",
        };
        f.write_str(name)
    }
}

// Composites compare by name only, so comparing descriptors of recursive types terminates.
impl PartialEq for TypeDescriptor<'_> {
    fn eq(&self, other: &Self) -> bool {
        use TypeDescriptor::*;

        // Also ends the comparison of a wrapper that leads back to itself.
        if ptr::eq(self, other) {
            return true;
        }

        match (self, other) {
            (Primitive(a), Primitive(b)) => a == b,
            (Nullable(a), Nullable(b)) => a == b,
            (Any, Any) | (StructLiteral, StructLiteral) | (UntypedArray, UntypedArray) => true,
            (Array(a), Array(b)) => a == b,
            (Map(a), Map(b)) | (Sequence(a), Sequence(b)) | (Unsupported(a), Unsupported(b)) => {
                a == b
            }
            (Composite(a), Composite(b)) => a == b,
            _ => false,
        }
    }
}
