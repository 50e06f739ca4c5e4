use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::descriptor::TypeDescriptor;

/// The member types being classified, from the outermost inwards.
///
/// Local to a single top-level classification.
pub(super) struct Visited<'r, 'a> {
    stack: Vec<&'r TypeDescriptor<'a>>,
}

impl<'r, 'a> Visited<'r, 'a> {
    pub(super) fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub(super) fn contains(&self, ty: &'r TypeDescriptor<'a>) -> bool {
        self.stack.contains(&ty)
    }

    /// Pushes `ty`, popping it again when the returned entry is dropped.
    pub(super) fn enter(&mut self, ty: &'r TypeDescriptor<'a>) -> Entry<'_, 'r, 'a> {
        self.stack.push(ty);

        Entry { visited: self }
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A type pushed on the [`Visited`] stack.
pub(super) struct Entry<'v, 'r, 'a> {
    visited: &'v mut Visited<'r, 'a>,
}

impl<'r, 'a> Deref for Entry<'_, 'r, 'a> {
    type Target = Visited<'r, 'a>;

    fn deref(&self) -> &Self::Target {
        self.visited
    }
}

impl DerefMut for Entry<'_, '_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.visited
    }
}

impl Drop for Entry<'_, '_, '_> {
    fn drop(&mut self) {
        self.visited.stack.pop();
    }
}
