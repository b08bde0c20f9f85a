use owo_colors::OwoColorize;

use crate::Shape;

/// Errors that can occur when reflecting on types.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ReflectError {
    /// Attempted to poke a value as one kind of thing, but its `Reflect` impl
    /// handed out another.
    WasNotA {
        /// The kind we asked for
        expected: &'static str,
        /// The shape of the value
        actual: &'static Shape,
        /// The kind the value poked as
        poked: &'static str,
    },

    /// A struct's shape lists more fields than its `PokeStruct` impl exposes
    FieldIndexOutOfBounds {
        /// The shape of the struct
        shape: &'static Shape,
        /// The index that was asked for
        index: usize,
    },

    /// An array slot past the end was asked for
    ArrayIndexOutOfBounds {
        /// The shape of the array
        shape: &'static Shape,
        /// The index that was out of bounds
        index: usize,
        /// The array size
        size: usize,
    },

    /// A number doesn't fit into the integer type it was written to
    NumberOutOfRange {
        /// The number, before truncation
        number: f64,
        /// The integer type
        shape: &'static Shape,
    },
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::WasNotA {
                expected,
                actual,
                poked,
            } => {
                write!(
                    f,
                    "Wrong shape: expected {} but {} poked as {}",
                    expected.green(),
                    actual.blue(),
                    poked.red()
                )
            }
            ReflectError::FieldIndexOutOfBounds { shape, index } => {
                write!(
                    f,
                    "Field index {} is out of bounds for {}",
                    index.red(),
                    shape.blue()
                )
            }
            ReflectError::ArrayIndexOutOfBounds { shape, index, size } => {
                write!(
                    f,
                    "Index {} is out of bounds for {} (size {})",
                    index.red(),
                    shape.blue(),
                    size
                )
            }
            ReflectError::NumberOutOfRange { number, shape } => {
                write!(
                    f,
                    "Number {} does not fit in {}",
                    number.red(),
                    shape.blue()
                )
            }
        }
    }
}

impl core::error::Error for ReflectError {}
