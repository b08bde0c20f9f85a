use alloc::vec::Vec;

use crate::{Def, ListDef, Poke, PokeList, Reflect, Shape, Shaped, shape_of};

impl<T> Shaped for Vec<T>
where
    T: Shaped + Default,
{
    const SHAPE: &'static Shape = &const { Shape::new("Vec", Def::List(ListDef::new(shape_of::<T>))) };
}

impl<T> Reflect for Vec<T>
where
    T: Shaped + Default,
{
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::List(self)
    }
}

impl<T> PokeList for Vec<T>
where
    T: Shaped + Default,
{
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        self.push(T::default());
        let last = <[T]>::len(self) - 1;
        &mut self[last]
    }
}
