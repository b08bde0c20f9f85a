use core::fmt;

mod def;
pub use def::*;

mod field;
pub use field::*;

/// A function returning a shape. Shapes refer to each other through these so
/// that recursive types (`struct Node { children: Vec<Node> }`) stay finite.
pub type ShapeFn = fn() -> &'static Shape;

/// Schema for reflection of a type
#[derive(Clone, Copy)]
pub struct Shape {
    /// The name of the type, without generic parameters: `Vec`, `u32`, `Person`.
    pub type_identifier: &'static str,

    /// What the type is made of
    pub def: Def,
}

impl Shape {
    /// Creates a shape
    pub const fn new(type_identifier: &'static str, def: Def) -> Self {
        Self {
            type_identifier,
            def,
        }
    }

    /// Returns true if this is a struct shape (named, tuple or unit)
    pub const fn is_struct(&self) -> bool {
        matches!(self.def, Def::Struct(_))
    }

    /// Returns true if this is a growable list or a fixed-size array
    pub const fn is_sequence(&self) -> bool {
        matches!(self.def, Def::List(_) | Def::Array(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.def {
            Def::List(ld) => write!(f, "{}<{}>", self.type_identifier, ld.t()),
            Def::Array(ad) => write!(f, "[{}; {}]", ad.t(), ad.n),
            Def::Pointer(pd) => match pd.kind {
                PointerKind::MutRef => write!(f, "&mut {}", pd.pointee()),
            },
            Def::Option(od) => write!(f, "Option<{}>", od.t()),
            Def::Map(md) => write!(f, "{}<{}, {}>", self.type_identifier, md.k(), md.v()),
            Def::Scalar(_) | Def::Struct(_) => f.write_str(self.type_identifier),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug_struct = f.debug_struct("Shape");

        // Always show the full type name
        debug_struct.field("type", &format_args!("{}", self));
        match &self.def {
            Def::Scalar(sd) => debug_struct.field("def", &sd.affinity),
            Def::Struct(sd) => debug_struct.field("def", sd),
            Def::List(_) => debug_struct.field("def", &"List"),
            Def::Array(ad) => debug_struct.field("def", &format_args!("Array({})", ad.n)),
            Def::Pointer(pd) => debug_struct.field("def", &pd.kind),
            Def::Option(_) => debug_struct.field("def", &"Option"),
            Def::Map(_) => debug_struct.field("def", &"Map"),
        };
        debug_struct.finish()
    }
}
