use crate::{Def, OptionDef, Poke, Reflect, Shape, Shaped, shape_of};

// Options are described but never written through reflection.
impl<T: Shaped> Shaped for Option<T> {
    const SHAPE: &'static Shape =
        &const { Shape::new("Option", Def::Option(OptionDef::new(shape_of::<T>))) };
}

impl<T: Shaped> Reflect for Option<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque
    }
}
