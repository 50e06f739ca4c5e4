//! Wire type classification.

mod visited;
use visited::Visited;

use crate::{
    describe::Describe,
    descriptor::{ArrayType, Composite, Primitive, TypeDescriptor},
    WireType,
};

/// Classifies a host type.
///
/// Never fails: types without a wire representation classify as [`WireType::Invalid`]. Arrays are
/// valid when their element type is, and composite types when all their members are. Members and
/// array elements of the universal type are always accepted.
///
/// Members whose type is already being classified further up are skipped rather than classified
/// again. As a consequence, a composite type whose only questionable member refers back to the
/// type itself is a valid [`WireType::Struct`]. Nullable and array wrappers that lead back to
/// themselves without passing through a composite type never reach a concrete type, and classify
/// as [`WireType::Invalid`].
pub fn classify(ty: &TypeDescriptor<'_>) -> WireType {
    let wire_type = classify_with(ty, &mut Visited::new());
    trace!("Classified type as {:?}", wire_type);

    wire_type
}

/// Classifies the Rust type `T`.
pub fn wire_type<T: Describe + ?Sized>() -> WireType {
    classify(T::DESCRIPTOR)
}

/// The wire name of a host type, `None` if it has no wire representation.
pub fn type_name(ty: &TypeDescriptor<'_>) -> Option<&'static str> {
    classify(ty).name()
}

/// The wire name of the Rust type `T`, `None` if it has no wire representation.
pub fn wire_type_name<T: Describe + ?Sized>() -> Option<&'static str> {
    wire_type::<T>().name()
}

fn classify_with<'r, 'a>(ty: &'r TypeDescriptor<'a>, visited: &mut Visited<'r, 'a>) -> WireType {
    match ty {
        TypeDescriptor::Primitive(primitive) => classify_primitive(*primitive),
        TypeDescriptor::Nullable(_) | TypeDescriptor::Array(_) if ty.wraps_itself() => {
            debug!("Type `{}` never reaches a concrete type", ty);
            WireType::Invalid
        }
        TypeDescriptor::Nullable(inner) => classify_with(inner.inner(), visited),
        // Byte sequences are arrays too, so this must come before the other arrays.
        TypeDescriptor::Array(array) if array.is_bytes() => WireType::Binary,
        TypeDescriptor::StructLiteral => WireType::Struct,
        TypeDescriptor::UntypedArray => WireType::Array,
        TypeDescriptor::Array(array) => classify_array(array, visited),
        TypeDescriptor::Map(_) => WireType::Map,
        TypeDescriptor::Sequence(_) => WireType::Sequence,
        // The universal type is a member-less record.
        TypeDescriptor::Any => WireType::Struct,
        TypeDescriptor::Composite(composite) => classify_composite(composite, visited),
        TypeDescriptor::Unsupported(_) => WireType::Invalid,
    }
}

fn classify_primitive(primitive: Primitive) -> WireType {
    match primitive {
        Primitive::Int32 => WireType::Int32,
        Primitive::Int64 => WireType::Int64,
        Primitive::Boolean => WireType::Boolean,
        Primitive::String => WireType::String,
        Primitive::Double => WireType::Double,
        Primitive::DateTime => WireType::DateTime,
        Primitive::Void => WireType::Void,
        Primitive::Byte => WireType::Invalid,
    }
}

fn classify_array<'r, 'a>(array: &'r ArrayType<'a>, visited: &mut Visited<'r, 'a>) -> WireType {
    let element = array.element();
    if !element.is_any() && !classify_with(element, visited).is_valid() {
        return WireType::Invalid;
    }

    if array.rank() == 1 {
        WireType::Array
    } else {
        WireType::MultiArray
    }
}

fn classify_composite<'r, 'a>(
    composite: &'r Composite<'a>,
    visited: &mut Visited<'r, 'a>,
) -> WireType {
    for member in composite.members() {
        let ty = member.ty();
        if visited.contains(ty) {
            trace!(
                "Skipping member `{}` of `{}`, its type is already being classified",
                member.name(),
                composite.name()
            );
            continue;
        }

        let mut entry = visited.enter(ty);
        if !ty.is_any() && !classify_with(ty, &mut entry).is_valid() {
            debug!(
                "Member `{}` of `{}` has no wire representation",
                member.name(),
                composite.name()
            );
            return WireType::Invalid;
        }
    }

    WireType::Struct
}
