use std::collections::HashMap;

use crate::{Def, MapDef, Poke, Reflect, Shape, Shaped, shape_of};

impl<K: Shaped, V: Shaped, S> Shaped for HashMap<K, V, S> {
    const SHAPE: &'static Shape = &const {
        Shape::new(
            "HashMap",
            Def::Map(MapDef::new(shape_of::<K>, shape_of::<V>)),
        )
    };
}

impl<K: Shaped, V: Shaped, S> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque
    }
}
