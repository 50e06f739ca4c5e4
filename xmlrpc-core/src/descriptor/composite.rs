use alloc::vec::Vec;
use core::fmt;

use super::{List, TypeDescriptor, TypeRef};

/// A record type: a class or struct described by its data members.
///
/// Composites are nominal. Two composites are equal when their names are, regardless of their
/// members.
#[derive(Clone)]
pub struct Composite<'a> {
    name: &'a str,
    members: List<'a, Member<'a>>,
}

impl<'a> Composite<'a> {
    /// Creates a new composite type with the given name and borrowed members.
    pub const fn new(name: &'a str, members: &'a [&'a Member<'a>]) -> Self {
        Self {
            name,
            members: List::Borrowed(members),
        }
    }

    /// Creates a new composite type with the given name and owned members.
    pub fn new_owned(name: &'a str, members: Vec<Member<'a>>) -> Self {
        Self {
            name,
            members: List::from(members),
        }
    }

    /// The name of the type.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The data members, fields and properties alike, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &Member<'a>> {
        self.members.iter()
    }
}

impl PartialEq for Composite<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Composite<'_> {}

impl fmt::Debug for Composite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("name", &self.name)
            .field("members", &self.members.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// A data member of a composite type.
#[derive(Clone, PartialEq, Eq)]
pub struct Member<'a> {
    name: &'a str,
    ty: TypeRef<'a>,
}

impl<'a> Member<'a> {
    /// Creates a new member with the given name and borrowed type.
    pub const fn new(name: &'a str, ty: &'a TypeDescriptor<'a>) -> Self {
        Self {
            name,
            ty: TypeRef::borrowed(ty),
        }
    }

    /// Creates a new member whose type is resolved through `ty` on access.
    ///
    /// Needed whenever the member type refers back to the composite being declared.
    pub const fn deferred(name: &'a str, ty: fn() -> &'a TypeDescriptor<'a>) -> Self {
        Self {
            name,
            ty: TypeRef::deferred(ty),
        }
    }

    /// Same as `new` but takes `ty` by value.
    pub fn new_owned(name: &'a str, ty: TypeDescriptor<'a>) -> Self {
        Self {
            name,
            ty: TypeRef::new(ty),
        }
    }

    /// The name of the member.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The declared type of the member.
    pub fn ty(&self) -> &TypeDescriptor<'a> {
        self.ty.inner()
    }
}

// Member types are shown by name only; a full dump would never end for recursive types.
impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("ty", &format_args!("{}", self.ty))
            .finish()
    }
}

impl fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
