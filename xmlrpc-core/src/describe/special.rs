//! Descriptions of special standard library and `serde_json` types.

use core::time::Duration;

impl_unsupported!(Duration);

#[cfg(feature = "std")]
mod std_types {
    use crate::descriptor::{Primitive, TypeDescriptor};

    impl_describe!(std::time::SystemTime => TypeDescriptor::Primitive(Primitive::DateTime));
    impl_describe!(
        std::path::Path,
        std::path::PathBuf,
        std::ffi::OsStr,
        std::ffi::OsString => TypeDescriptor::Primitive(Primitive::String)
    );

    // A JSON value can hold anything.
    impl_describe!(serde_json::Value => TypeDescriptor::Any);
    impl_describe!(serde_json::Map<String, serde_json::Value> => TypeDescriptor::StructLiteral);
}
