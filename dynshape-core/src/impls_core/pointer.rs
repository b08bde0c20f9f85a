use crate::{Def, PointerDef, PointerKind, Poke, Reflect, Shape, Shaped, shape_of};

impl<T: Shaped> Shaped for &mut T {
    const SHAPE: &'static Shape = &const {
        Shape::new(
            "&mut",
            Def::Pointer(PointerDef::new(PointerKind::MutRef, shape_of::<T>)),
        )
    };
}

impl<T: Shaped> Reflect for &mut T {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Pointer(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_shape_names_pointee() {
        assert_eq!(<&mut i64>::SHAPE.to_string(), "&mut i64");
        assert!(matches!(
            <&mut i64>::SHAPE.def,
            Def::Pointer(pd) if pd.kind == PointerKind::MutRef
        ));
    }

    #[test]
    fn poke_through_pointer_reaches_target() {
        let mut n = 1u32;
        let mut r = &mut n;
        let reflect: &mut dyn Reflect = &mut r;
        let target = reflect.poke_pointer().unwrap();
        target.poke_integer().unwrap().set_truncated(42.0).unwrap();
        assert_eq!(n, 42);
    }
}
