//! Descriptions of primitive types.

use crate::descriptor::{Primitive, TypeDescriptor};
use alloc::string::String;

impl_describe!(i32 => TypeDescriptor::Primitive(Primitive::Int32));
impl_describe!(i64 => TypeDescriptor::Primitive(Primitive::Int64));
impl_describe!(bool => TypeDescriptor::Primitive(Primitive::Boolean));
impl_describe!(f64 => TypeDescriptor::Primitive(Primitive::Double));
impl_describe!(str, String => TypeDescriptor::Primitive(Primitive::String));
impl_describe!(u8 => TypeDescriptor::Primitive(Primitive::Byte));
impl_describe!(() => TypeDescriptor::Primitive(Primitive::Void));

// Only 32 and 64-bit signed integers and doubles exist on the wire.
impl_unsupported!(i8, i16, i128, isize);
impl_unsupported!(u16, u32, u64, u128, usize);
impl_unsupported!(f32, char);
