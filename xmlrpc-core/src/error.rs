use alloc::string::String;
use core::fmt;

/// The Error type for the xmlrpc crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A method parameter or return type has no XML-RPC representation.
    InvalidType {
        /// The remote name of the method.
        method: String,
        /// Where in the signature the type appears.
        position: Position,
        /// The host name of the offending type.
        ty: String,
    },
    /// Two methods resolve to the same remote name.
    DuplicateMethod(String),
}

/// The Result type for the xmlrpc crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The position of a type in a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// The parameter with the given name.
    Parameter(String),
    /// The return type.
    Return,
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidType {
                method,
                position,
                ty,
            } => write!(
                f,
                "{position} of method `{method}` has type `{ty}` which has no XML-RPC mapping"
            ),
            Error::DuplicateMethod(name) => write!(f, "Duplicate method name `{name}`"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Parameter(name) => write!(f, "Parameter `{name}`"),
            Position::Return => write!(f, "Return value"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Error::InvalidType { method, ty, .. } => defmt::write!(
                fmt,
                "Method `{}` has a type `{}` without XML-RPC mapping",
                method.as_str(),
                ty.as_str()
            ),
            Error::DuplicateMethod(name) => {
                defmt::write!(fmt, "Duplicate method name `{}`", name.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn error_display() {
        let err = Error::InvalidType {
            method: "math.add".to_string(),
            position: Position::Parameter("lhs".to_string()),
            ty: "u64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parameter `lhs` of method `math.add` has type `u64` which has no XML-RPC mapping"
        );

        let err = Error::InvalidType {
            method: "math.add".to_string(),
            position: Position::Return,
            ty: "char".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Return value of method `math.add` has type `char` which has no XML-RPC mapping"
        );

        let err = Error::DuplicateMethod("math.add".to_string());
        assert_eq!(err.to_string(), "Duplicate method name `math.add`");
    }
}
