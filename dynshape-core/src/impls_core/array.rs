use crate::{ArrayDef, Def, Poke, PokeArray, Reflect, Shape, Shaped, shape_of};

impl<T, const N: usize> Shaped for [T; N]
where
    T: Shaped + Default,
{
    const SHAPE: &'static Shape =
        &const { Shape::new("array", Def::Array(ArrayDef::new(shape_of::<T>, N))) };
}

impl<T, const N: usize> Reflect for [T; N]
where
    T: Shaped + Default,
{
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn poke(&mut self) -> Poke<'_> {
        Poke::Array(self)
    }
}

impl<T, const N: usize> PokeArray for [T; N]
where
    T: Shaped + Default,
{
    fn len(&self) -> usize {
        N
    }

    fn reset_element(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        let slot = self.get_mut(index)?;
        *slot = T::default();
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_shape_displays_length() {
        assert_eq!(<[u16; 4]>::SHAPE.to_string(), "[u16; 4]");
        assert!(<[u16; 4]>::SHAPE.is_sequence());
    }

    #[test]
    fn reset_element_clears_slot() {
        let mut arr = [5u8, 6, 7];
        let slot = arr.reset_element(1).unwrap();
        assert_eq!(slot.shape().to_string(), "u8");
        assert_eq!(arr, [5, 0, 7]);
        assert!(arr.reset_element(3).is_none());
    }
}
