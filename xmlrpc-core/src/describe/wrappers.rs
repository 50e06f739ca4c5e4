//! Descriptions of wrapper types.
//!
//! Options are nullable. Smart pointers, cells and references are transparent.

use super::Describe;
use crate::descriptor::{TypeDescriptor, TypeRef};
use alloc::{borrow::Cow, borrow::ToOwned, boxed::Box, rc::Rc, sync::Arc};
use core::cell::{Cell, RefCell};

impl<T: Describe> Describe for Option<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Nullable(TypeRef::borrowed(T::DESCRIPTOR));
}

macro_rules! impl_transparent {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Describe + ?Sized> Describe for $wrapper<T> {
                const DESCRIPTOR: &'static TypeDescriptor<'static> = T::DESCRIPTOR;
            }
        )+
    };
}

impl_transparent!(Box, Rc, Arc, RefCell);

impl<T: Describe> Describe for Cell<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = T::DESCRIPTOR;
}

impl<T: Describe + ToOwned + ?Sized> Describe for Cow<'_, T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = T::DESCRIPTOR;
}

impl<T: Describe + ?Sized> Describe for &T {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = T::DESCRIPTOR;
}

impl<T: Describe + ?Sized> Describe for &mut T {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = T::DESCRIPTOR;
}
