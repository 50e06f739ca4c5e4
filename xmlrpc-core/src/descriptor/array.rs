use core::fmt;

use super::{Primitive, TypeDescriptor, TypeRef};

/// A typed array: an element type and a number of dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType<'a> {
    element: TypeRef<'a>,
    rank: usize,
}

impl<'a> ArrayType<'a> {
    /// Creates a new array type with a borrowed element type.
    ///
    /// # Panics
    ///
    /// If `rank` is zero.
    pub const fn new(element: &'a TypeDescriptor<'a>, rank: usize) -> Self {
        assert!(rank > 0, "array rank must be at least 1");

        Self {
            element: TypeRef::borrowed(element),
            rank,
        }
    }

    /// Same as `new` but takes `element` by value.
    ///
    /// # Panics
    ///
    /// If `rank` is zero.
    pub fn new_owned(element: TypeDescriptor<'a>, rank: usize) -> Self {
        Self::with_ref(TypeRef::new(element), rank)
    }

    /// Creates a new array type from any kind of type reference.
    ///
    /// # Panics
    ///
    /// If `rank` is zero.
    pub fn with_ref(element: TypeRef<'a>, rank: usize) -> Self {
        assert!(rank > 0, "array rank must be at least 1");

        Self { element, rank }
    }

    /// The element type.
    pub fn element(&self) -> &TypeDescriptor<'a> {
        self.element.inner()
    }

    /// The number of dimensions, `1` for a single-dimensional array.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Whether this is a byte sequence: a single-dimensional array of bytes.
    pub fn is_bytes(&self) -> bool {
        self.rank == 1 && self.element().primitive() == Some(Primitive::Byte)
    }
}

impl fmt::Display for ArrayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.element)?;
        for _ in 1..self.rank {
            write!(f, ",")?;
        }
        write!(f, "]")
    }
}
