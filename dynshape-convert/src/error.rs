use dynshape_core::{ReflectError, Shape};
use owo_colors::OwoColorize;

use crate::{Path, ValueKind};

/// Why a conversion stopped.
///
/// Conversion stops at the first error. Whatever was written to the
/// destination before that point stays written.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ConvertError {
    /// The destination was passed by value instead of by `&mut`
    NotAReference {
        /// The type that was passed
        shape: &'static Shape,
    },

    /// The destination (or an element of it) is neither a struct nor a sequence
    UnsupportedShape {
        /// The offending type
        shape: &'static Shape,
        /// Where it sits in the destination
        path: Path,
    },

    /// The data doesn't have the overall shape the destination needs
    ShapeMismatch {
        /// Where in the destination
        path: Path,
        /// What the destination needs
        expected: ValueKind,
        /// What the data holds
        got: ValueKind,
    },

    /// A field's value has the wrong kind for the field's type
    TypeMismatch {
        /// The field name
        field: &'static str,
        /// Path of the field
        path: Path,
        /// What the field needs
        expected: ValueKind,
        /// What the data holds
        got: ValueKind,
    },

    /// A number doesn't fit the integer field it was written to, even once
    /// truncated
    NumberOutOfRange {
        /// The field name
        field: &'static str,
        /// Path of the field
        path: Path,
        /// The number from the data
        number: f64,
        /// The integer type
        shape: &'static Shape,
    },

    /// More elements than a fixed-size array can hold
    ArrayOverflow {
        /// Path of the array
        path: Path,
        /// `N` in `[T; N]`
        capacity: usize,
        /// Number of elements in the data
        got: usize,
    },

    /// A field of a kind the converter can't write has a key in the data.
    /// Only reported under [`UnsupportedFields::Reject`](crate::UnsupportedFields::Reject).
    UnsupportedField {
        /// The field name
        field: &'static str,
        /// Path of the field
        path: Path,
        /// The field's type
        shape: &'static Shape,
    },

    /// Destinations are nested deeper than [`ConvertOptions::max_depth`](crate::ConvertOptions::max_depth)
    DepthExceeded {
        /// Path of the destination that would have gone over the limit
        path: Path,
        /// The configured limit
        max_depth: usize,
    },

    /// A `Reflect` impl handed out something other than what its shape promised
    Reflect(ReflectError),
}

impl From<ReflectError> for ConvertError {
    fn from(err: ReflectError) -> Self {
        ConvertError::Reflect(err)
    }
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConvertError::NotAReference { shape } => {
                write!(
                    f,
                    "Destination {} is not a mutable reference, pass &mut {} instead",
                    shape.blue(),
                    shape.green()
                )
            }
            ConvertError::UnsupportedShape { shape, path } => {
                write!(
                    f,
                    "Unsupported destination {} at {}: expected a struct or a sequence",
                    shape.red(),
                    path.yellow()
                )
            }
            ConvertError::ShapeMismatch {
                path,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Shape mismatch at {}: expected {}, got {}",
                    path.yellow(),
                    expected.green(),
                    got.red()
                )
            }
            ConvertError::TypeMismatch {
                field,
                path,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Type mismatch for field {} at {}: expected {}, got {}",
                    field.blue(),
                    path.yellow(),
                    expected.green(),
                    got.red()
                )
            }
            ConvertError::NumberOutOfRange {
                field,
                path,
                number,
                shape,
            } => {
                write!(
                    f,
                    "Number {} for field {} at {} does not fit in {}",
                    number.red(),
                    field.blue(),
                    path.yellow(),
                    shape.green()
                )
            }
            ConvertError::ArrayOverflow {
                path,
                capacity,
                got,
            } => {
                write!(
                    f,
                    "Array at {} holds {} elements, got {}",
                    path.yellow(),
                    capacity.green(),
                    got.red()
                )
            }
            ConvertError::UnsupportedField { field, path, shape } => {
                write!(
                    f,
                    "Field {} at {} has unsupported type {}",
                    field.blue(),
                    path.yellow(),
                    shape.red()
                )
            }
            ConvertError::DepthExceeded { path, max_depth } => {
                write!(
                    f,
                    "Nesting at {} exceeds the maximum depth of {}",
                    path.yellow(),
                    max_depth.red()
                )
            }
            ConvertError::Reflect(err) => write!(f, "Reflection error: {err}"),
        }
    }
}

impl core::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ConvertError::Reflect(err) => Some(err),
            _ => None,
        }
    }
}
