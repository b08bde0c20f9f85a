use core::fmt;

use super::{Shape, ShapeFn};

/// Describes a field in a struct or tuple struct
#[derive(Clone, Copy)]
pub struct Field {
    /// key for the struct field (for tuple structs, this is the 0-based index)
    pub name: &'static str,

    /// shape of the field's type
    pub shape: ShapeFn,
}

impl Field {
    /// Creates a field
    pub const fn new(name: &'static str, shape: ShapeFn) -> Self {
        Self { name, shape }
    }

    /// Returns the shape of the field's type
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.shape())
    }
}
