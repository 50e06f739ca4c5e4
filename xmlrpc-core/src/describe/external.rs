//! Descriptions of third-party types, gated behind their respective feature flags.

// ============================================================================
// Chrono support
// ============================================================================

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> super::Describe for chrono::DateTime<Tz> {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::DATE_TIME;
}

#[cfg(feature = "chrono")]
impl super::Describe for chrono::NaiveDateTime {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::DATE_TIME;
}

// ============================================================================
// Time crate support
// ============================================================================

#[cfg(feature = "time")]
impl super::Describe for time::OffsetDateTime {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::DATE_TIME;
}

#[cfg(feature = "time")]
impl super::Describe for time::PrimitiveDateTime {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::DATE_TIME;
}

// ============================================================================
// Bytes support
// ============================================================================

#[cfg(feature = "bytes")]
impl super::Describe for bytes::Bytes {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::BYTES;
}

#[cfg(feature = "bytes")]
impl super::Describe for bytes::BytesMut {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        crate::descriptor::TypeDescriptor::BYTES;
}

// ============================================================================
// IndexMap support
// ============================================================================

#[cfg(feature = "indexmap")]
impl<K, V, S> super::Describe for indexmap::IndexMap<K, V, S> {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        &crate::descriptor::TypeDescriptor::Map("IndexMap");
}

#[cfg(feature = "indexmap")]
impl<T, S> super::Describe for indexmap::IndexSet<T, S> {
    const DESCRIPTOR: &'static crate::descriptor::TypeDescriptor<'static> =
        &crate::descriptor::TypeDescriptor::Sequence("IndexSet");
}
