use serde::{ser::Error as _, Serialize, Serializer};

/// An XML-RPC wire type.
///
/// The taxonomy is finer than the protocol's: maps and structs share the `struct` wire name, and
/// sequences as well as single and multi-dimensional arrays share the `array` one, but encoders
/// need to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireType {
    /// `<i4>`/`<int>`: 32-bit signed integer.
    Int32,
    /// `<i8>`: 64-bit signed integer.
    Int64,
    /// `<boolean>`.
    Boolean,
    /// `<string>`.
    String,
    /// `<double>`.
    Double,
    /// `<dateTime.iso8601>`.
    DateTime,
    /// `<base64>`: a byte sequence.
    Binary,
    /// `<struct>` built from a record type.
    Struct,
    /// `<struct>` built from a key-value mapping.
    Map,
    /// `<array>` built from an iterable collection.
    Sequence,
    /// `<array>` built from a single-dimensional array.
    Array,
    /// `<array>` built from a multi-dimensional array.
    MultiArray,
    /// No value.
    Void,
    /// The type has no wire representation.
    Invalid,
}

impl WireType {
    /// The name of the type, as used in introspection responses.
    ///
    /// Returns `None` for [`WireType::Invalid`].
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            WireType::Int32 => "integer",
            WireType::Int64 => "i8",
            WireType::Boolean => "boolean",
            WireType::String => "string",
            WireType::Double => "double",
            WireType::DateTime => "dateTime",
            WireType::Binary => "base64",
            WireType::Struct | WireType::Map => "struct",
            WireType::Sequence | WireType::Array | WireType::MultiArray => "array",
            WireType::Void => "void",
            WireType::Invalid => return None,
        };

        Some(name)
    }

    /// Whether the type has a wire representation.
    pub const fn is_valid(self) -> bool {
        !matches!(self, WireType::Invalid)
    }
}

impl Serialize for WireType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(S::Error::custom("type has no XML-RPC representation")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let expected = [
            (WireType::Int32, Some("integer")),
            (WireType::Int64, Some("i8")),
            (WireType::Boolean, Some("boolean")),
            (WireType::String, Some("string")),
            (WireType::Double, Some("double")),
            (WireType::DateTime, Some("dateTime")),
            (WireType::Binary, Some("base64")),
            (WireType::Struct, Some("struct")),
            (WireType::Map, Some("struct")),
            (WireType::Sequence, Some("array")),
            (WireType::Array, Some("array")),
            (WireType::MultiArray, Some("array")),
            (WireType::Void, Some("void")),
            (WireType::Invalid, None),
        ];
        for (wire_type, name) in expected {
            assert_eq!(wire_type.name(), name, "{wire_type:?}");
            assert_eq!(wire_type.is_valid(), name.is_some());
        }
    }

    #[test]
    fn serialization() {
        assert_eq!(
            serde_json::to_string(&WireType::MultiArray).unwrap(),
            r#""array""#
        );
        assert_eq!(
            serde_json::to_string(&[WireType::Map, WireType::Int64]).unwrap(),
            r#"["struct","i8"]"#
        );
        assert!(serde_json::to_string(&WireType::Invalid).is_err());
    }
}
