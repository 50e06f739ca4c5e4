use super::TypeDescriptor;
use alloc::boxed::Box;
use core::{fmt, ops::Deref};

/// A reference to a type descriptor.
///
/// Besides borrowed and owned descriptors, a reference can be *deferred*: it holds a function
/// that produces the descriptor when first looked at. This is what allows a `'static` composite
/// descriptor to refer to itself, directly or through other composites.
#[derive(Clone)]
pub struct TypeRef<'a>(TypeRefInner<'a>);

impl<'a> TypeRef<'a> {
    /// Creates a new type reference with an owned descriptor.
    pub fn new(inner: TypeDescriptor<'a>) -> Self {
        Self(TypeRefInner::Owned(Box::new(inner)))
    }

    /// Creates a new type reference with a borrowed descriptor.
    pub const fn borrowed(inner: &'a TypeDescriptor<'a>) -> Self {
        Self(TypeRefInner::Borrowed(inner))
    }

    /// Creates a new type reference resolved through `resolve` on access.
    pub const fn deferred(resolve: fn() -> &'a TypeDescriptor<'a>) -> Self {
        Self(TypeRefInner::Deferred(resolve))
    }

    /// Returns a reference to the inner descriptor.
    pub fn inner(&self) -> &TypeDescriptor<'a> {
        match &self.0 {
            TypeRefInner::Borrowed(inner) => inner,
            TypeRefInner::Deferred(resolve) => resolve(),
            TypeRefInner::Owned(inner) => inner,
        }
    }
}

impl<'a> Deref for TypeRef<'a> {
    type Target = TypeDescriptor<'a>;

    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl fmt::Debug for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.inner() == other.inner()
    }
}

impl Eq for TypeRef<'_> {}

impl<'a> PartialEq<TypeDescriptor<'a>> for TypeRef<'a> {
    fn eq(&self, other: &TypeDescriptor<'a>) -> bool {
        self.inner() == other
    }
}

#[derive(Clone)]
enum TypeRefInner<'a> {
    Borrowed(&'a TypeDescriptor<'a>),
    Deferred(fn() -> &'a TypeDescriptor<'a>),
    Owned(Box<TypeDescriptor<'a>>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Primitive;

    fn double() -> &'static TypeDescriptor<'static> {
        TypeDescriptor::DOUBLE
    }

    #[test]
    fn all_forms_resolve_to_the_same_descriptor() {
        let borrowed = TypeRef::borrowed(TypeDescriptor::DOUBLE);
        let deferred = TypeRef::deferred(double);
        let owned = TypeRef::new(TypeDescriptor::Primitive(Primitive::Double));

        assert_eq!(borrowed, deferred);
        assert_eq!(deferred, owned);
        assert_eq!(*owned, TypeDescriptor::Primitive(Primitive::Double));
        assert_eq!(owned, TypeDescriptor::Primitive(Primitive::Double));
    }
}
