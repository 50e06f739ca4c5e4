//! List type for holding either borrowed or owned collections.

use alloc::vec::Vec;

/// A list that can be either borrowed or owned.
///
/// Descriptors declared in `const` and `static` items borrow their lists, while descriptors
/// assembled at runtime by a host adapter own them.
#[derive(Debug, Clone, Eq)]
pub enum List<'a, T> {
    /// Borrowed slice of references, useful for const contexts.
    Borrowed(&'a [&'a T]),
    /// Owned vector, built at runtime.
    Owned(Vec<T>),
}

impl<'a, T> List<'a, T> {
    /// Returns an iterator over references to the items.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            List::Borrowed(slice) => ListIter::Borrowed(slice.iter()),
            List::Owned(vec) => ListIter::Owned(vec.iter()),
        }
    }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        match self {
            List::Borrowed(slice) => slice.len(),
            List::Owned(vec) => vec.len(),
        }
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

enum ListIter<'a, T> {
    Borrowed(core::slice::Iter<'a, &'a T>),
    Owned(core::slice::Iter<'a, T>),
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ListIter::Borrowed(iter) => iter.next().copied(),
            ListIter::Owned(iter) => iter.next(),
        }
    }
}

impl<'a, T> Default for List<'a, T> {
    fn default() -> Self {
        List::Borrowed(&[])
    }
}

impl<'a, T> From<Vec<T>> for List<'a, T> {
    fn from(vec: Vec<T>) -> Self {
        List::Owned(vec)
    }
}

impl<'a, T> From<&'a [&'a T]> for List<'a, T> {
    fn from(slice: &'a [&'a T]) -> Self {
        List::Borrowed(slice)
    }
}

impl<'a, T> PartialEq for List<'a, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::descriptor::{Member, TypeDescriptor};

    static ID: Member<'static> = Member::new("id", TypeDescriptor::INT32);
    static LABEL: Member<'static> = Member::new("label", TypeDescriptor::STRING);
    static MEMBERS: [&Member<'static>; 2] = [&ID, &LABEL];

    #[test]
    fn borrowed_and_owned() {
        let borrowed: List<'_, Member<'_>> = List::Borrowed(&MEMBERS);
        assert_eq!(borrowed.len(), 2);
        assert!(!borrowed.is_empty());
        let names: Vec<_> = borrowed.iter().map(Member::name).collect();
        assert_eq!(names, ["id", "label"]);

        let owned: List<'_, Member<'_>> = List::from(vec![
            Member::new("id", TypeDescriptor::INT32),
            Member::new("label", TypeDescriptor::STRING),
        ]);
        assert_eq!(owned.len(), 2);
        assert_eq!(borrowed, owned);
        assert_eq!(owned, borrowed);

        let shorter: List<'_, Member<'_>> =
            List::from(vec![Member::new("id", TypeDescriptor::INT32)]);
        assert_ne!(borrowed, shorter);
    }

    #[test]
    fn default_is_empty() {
        let list: List<'_, Member<'_>> = List::default();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
