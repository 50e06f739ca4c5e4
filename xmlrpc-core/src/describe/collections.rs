//! Descriptions of collection types.

use super::Describe;
use crate::descriptor::{ArrayType, TypeDescriptor};
use alloc::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    vec::Vec,
};

// ============================================================================
// Arrays - single-dimensional, element types are checked
// ============================================================================

impl<T: Describe> Describe for Vec<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Array(ArrayType::new(T::DESCRIPTOR, 1));
}

impl<T: Describe> Describe for [T] {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Array(ArrayType::new(T::DESCRIPTOR, 1));
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Array(ArrayType::new(T::DESCRIPTOR, 1));
}

// ============================================================================
// Maps - keys and values are decided at encoding time
// ============================================================================

impl<K, V> Describe for BTreeMap<K, V> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = &TypeDescriptor::Map("BTreeMap");
}

#[cfg(feature = "std")]
impl<K, V, S> Describe for std::collections::HashMap<K, V, S> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = &TypeDescriptor::Map("HashMap");
}

// ============================================================================
// Sequences - iterable collections that aren't arrays
// ============================================================================

impl<T> Describe for BTreeSet<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = &TypeDescriptor::Sequence("BTreeSet");
}

impl<T> Describe for VecDeque<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = &TypeDescriptor::Sequence("VecDeque");
}

impl<T> Describe for LinkedList<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Sequence("LinkedList");
}

impl<T> Describe for BinaryHeap<T> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> =
        &TypeDescriptor::Sequence("BinaryHeap");
}

#[cfg(feature = "std")]
impl<T, S> Describe for std::collections::HashSet<T, S> {
    const DESCRIPTOR: &'static TypeDescriptor<'static> = &TypeDescriptor::Sequence("HashSet");
}
