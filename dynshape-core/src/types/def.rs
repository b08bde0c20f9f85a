use super::{Field, Shape, ShapeFn};

/// The semantic definition of a shape: is it more like a scalar, a struct, a list?
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// Scalar: not composed of other things.
    ///
    /// e.g. `u32`, `String`, `bool`
    Scalar(ScalarDef),

    /// Struct with named fields, tuple struct, or unit struct.
    Struct(StructDef),

    /// Ordered list of homogeneous values, variable size
    ///
    /// e.g. `Vec<T>`
    List(ListDef),

    /// Fixed-size array of homogeneous values
    ///
    /// e.g. `[T; 3]`
    Array(ArrayDef),

    /// Pointer to another value
    ///
    /// e.g. `&mut T`
    Pointer(PointerDef),

    /// Option
    ///
    /// e.g. `Option<T>`
    Option(OptionDef),

    /// Map with homogeneous keys and values
    ///
    /// e.g. `BTreeMap<K, V>`
    Map(MapDef),
}

/// Definition for scalar types
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScalarDef {
    /// What kind of scalar this is
    pub affinity: ScalarAffinity,
}

impl ScalarDef {
    /// Creates a scalar definition with the given affinity
    pub const fn new(affinity: ScalarAffinity) -> Self {
        Self { affinity }
    }
}

/// Scalar affinity: what a scalar value is, independently of its exact Rust type
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ScalarAffinity {
    /// Integer of the given width
    Integer {
        /// Whether the integer can hold negative values
        signed: bool,
        /// Width in bits
        bits: u32,
    },
    /// `f32`, `f64`
    Float,
    /// Owned UTF-8 string
    String,
    /// `bool`
    Boolean,
    /// `char`
    Char,
    /// `()`
    Unit,
}

/// Definition for struct types
#[derive(Clone, Copy, Debug)]
pub struct StructDef {
    /// Named, tuple or unit
    pub kind: StructKind,
    /// Fields, in declaration order
    pub fields: &'static [Field],
}

impl StructDef {
    /// Creates a struct definition
    pub const fn new(kind: StructKind, fields: &'static [Field]) -> Self {
        Self { kind, fields }
    }
}

/// Describes the kind of struct
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StructKind {
    /// `struct Person { name: String }`
    Struct,
    /// `struct Meters(u32);`
    TupleStruct,
    /// `struct Marker;`
    Unit,
}

/// Fields for list types
#[derive(Clone, Copy, Debug)]
pub struct ListDef {
    /// shape of the items in the list
    pub t: ShapeFn,
}

impl ListDef {
    /// Creates a list definition
    pub const fn new(t: ShapeFn) -> Self {
        Self { t }
    }

    /// Returns the shape of the items in the list
    pub fn t(&self) -> &'static Shape {
        (self.t)()
    }
}

/// Fields for fixed-size array types
#[derive(Clone, Copy, Debug)]
pub struct ArrayDef {
    /// shape of the items in the array
    pub t: ShapeFn,
    /// number of items
    pub n: usize,
}

impl ArrayDef {
    /// Creates an array definition
    pub const fn new(t: ShapeFn, n: usize) -> Self {
        Self { t, n }
    }

    /// Returns the shape of the items in the array
    pub fn t(&self) -> &'static Shape {
        (self.t)()
    }
}

/// Kind of pointer
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerKind {
    /// `&mut T`
    MutRef,
}

/// Fields for pointer types
#[derive(Clone, Copy, Debug)]
pub struct PointerDef {
    /// What kind of pointer this is
    pub kind: PointerKind,
    /// shape of the pointee
    pub pointee: ShapeFn,
}

impl PointerDef {
    /// Creates a pointer definition
    pub const fn new(kind: PointerKind, pointee: ShapeFn) -> Self {
        Self { kind, pointee }
    }

    /// Returns the shape of the pointee
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }
}

/// Fields for `Option<T>`
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// shape of the inner type
    pub t: ShapeFn,
}

impl OptionDef {
    /// Creates an option definition
    pub const fn new(t: ShapeFn) -> Self {
        Self { t }
    }

    /// Returns the shape of the inner type
    pub fn t(&self) -> &'static Shape {
        (self.t)()
    }
}

/// Fields for map types
#[derive(Clone, Copy, Debug)]
pub struct MapDef {
    /// shape of the keys
    pub k: ShapeFn,
    /// shape of the values
    pub v: ShapeFn,
}

impl MapDef {
    /// Creates a map definition
    pub const fn new(k: ShapeFn, v: ShapeFn) -> Self {
        Self { k, v }
    }

    /// Returns the shape of the keys
    pub fn k(&self) -> &'static Shape {
        (self.k)()
    }

    /// Returns the shape of the values
    pub fn v(&self) -> &'static Shape {
        (self.v)()
    }
}
