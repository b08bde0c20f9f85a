//! Typed write access into reflected values.

use alloc::string::String;

use crate::{ReflectError, Reflect};

/// A mutable borrow of a reflected value, sorted by what the value is.
///
/// Obtained through [`Reflect::poke`]. The variant always agrees with the
/// value's [`Shape`](crate::Shape): a shape with `Def::Struct` pokes as
/// [`Poke::Struct`], and so on. Kinds that cannot be written to from dynamic
/// data (floats, chars, options, maps) poke as [`Poke::Opaque`].
pub enum Poke<'mem> {
    /// A struct; its fields are reachable by index
    Struct(&'mem mut dyn PokeStruct),
    /// A growable list
    List(&'mem mut dyn PokeList),
    /// A fixed-size array
    Array(&'mem mut dyn PokeArray),
    /// Any integer type
    Integer(&'mem mut dyn PokeInteger),
    /// An owned string
    String(&'mem mut String),
    /// A boolean
    Bool(&'mem mut bool),
    /// The target of a `&mut T`
    Pointer(&'mem mut dyn Reflect),
    /// Something that cannot be written through reflection
    Opaque,
}

impl Poke<'_> {
    /// Name of the variant, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Poke::Struct(_) => "struct",
            Poke::List(_) => "list",
            Poke::Array(_) => "array",
            Poke::Integer(_) => "integer",
            Poke::String(_) => "string",
            Poke::Bool(_) => "bool",
            Poke::Pointer(_) => "pointer",
            Poke::Opaque => "opaque value",
        }
    }
}

/// Field access for structs. Implemented by `#[derive(Reflect)]`.
pub trait PokeStruct {
    /// Borrows the field at `index`, in declaration order.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Growable lists (`Vec<T>`)
pub trait PokeList {
    /// Number of items currently in the list
    fn len(&self) -> usize;

    /// Returns true if the list holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a default-initialized item and borrows it.
    fn push_default(&mut self) -> &mut dyn Reflect;
}

/// Fixed-size arrays (`[T; N]`)
pub trait PokeArray {
    /// Number of slots, always `N`
    fn len(&self) -> usize;

    /// Returns true for zero-sized arrays
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the slot at `index` to its default value and borrows it.
    /// Returns `None` past the end of the array.
    fn reset_element(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Integers of any width and signedness
pub trait PokeInteger {
    /// Stores `number` with its fractional part discarded (truncation toward
    /// zero, never rounding).
    ///
    /// Fails with [`ReflectError::NumberOutOfRange`] if the truncated value
    /// does not fit the target type, or if `number` is not finite. The target
    /// is left untouched on failure.
    fn set_truncated(&mut self, number: f64) -> Result<(), ReflectError>;
}

impl dyn Reflect + '_ {
    /// Borrows this value as a struct, or fails if it isn't one.
    pub fn poke_struct(&mut self) -> Result<&mut dyn PokeStruct, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::Struct(s) => Ok(s),
            other => Err(ReflectError::WasNotA {
                expected: "struct",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Borrows this value as a growable list, or fails if it isn't one.
    pub fn poke_list(&mut self) -> Result<&mut dyn PokeList, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::List(l) => Ok(l),
            other => Err(ReflectError::WasNotA {
                expected: "list",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Borrows this value as a fixed-size array, or fails if it isn't one.
    pub fn poke_array(&mut self) -> Result<&mut dyn PokeArray, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::Array(a) => Ok(a),
            other => Err(ReflectError::WasNotA {
                expected: "array",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Borrows this value as an integer, or fails if it isn't one.
    pub fn poke_integer(&mut self) -> Result<&mut dyn PokeInteger, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::Integer(i) => Ok(i),
            other => Err(ReflectError::WasNotA {
                expected: "integer",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Borrows this value as a string, or fails if it isn't one.
    pub fn poke_string(&mut self) -> Result<&mut String, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::String(s) => Ok(s),
            other => Err(ReflectError::WasNotA {
                expected: "string",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Borrows this value as a boolean, or fails if it isn't one.
    pub fn poke_bool(&mut self) -> Result<&mut bool, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::Bool(b) => Ok(b),
            other => Err(ReflectError::WasNotA {
                expected: "bool",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }

    /// Follows a `&mut T` to its target, or fails if this isn't a pointer.
    pub fn poke_pointer(&mut self) -> Result<&mut dyn Reflect, ReflectError> {
        let shape = self.shape();
        match self.poke() {
            Poke::Pointer(p) => Ok(p),
            other => Err(ReflectError::WasNotA {
                expected: "pointer",
                actual: shape,
                poked: other.kind_name(),
            }),
        }
    }
}
