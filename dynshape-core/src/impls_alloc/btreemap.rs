use alloc::collections::BTreeMap;

use crate::{Def, MapDef, Poke, Reflect, Shape, Shaped, shape_of};

impl<K: Shaped, V: Shaped> Shaped for BTreeMap<K, V> {
    const SHAPE: &'static Shape = &const {
        Shape::new(
            "BTreeMap",
            Def::Map(MapDef::new(shape_of::<K>, shape_of::<V>)),
        )
    };
}

impl<K: Shaped, V: Shaped> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Opaque
    }
}
