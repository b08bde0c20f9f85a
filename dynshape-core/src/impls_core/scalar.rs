use num_traits::cast::NumCast;

use crate::macros::impl_scalar;
use crate::{Poke, PokeInteger, ReflectError, ScalarAffinity, Shaped};

macro_rules! impl_integer {
    ($($ty:ty => $signed:literal),* $(,)?) => {
        $(
            impl_scalar!(
                $ty,
                ScalarAffinity::Integer {
                    signed: $signed,
                    bits: <$ty>::BITS,
                },
                |this| Poke::Integer(this)
            );

            impl PokeInteger for $ty {
                fn set_truncated(&mut self, number: f64) -> Result<(), ReflectError> {
                    // NumCast truncates toward zero and rejects NaN, infinities
                    // and anything outside the target range.
                    match <$ty as NumCast>::from(number) {
                        Some(value) => {
                            *self = value;
                            Ok(())
                        }
                        None => Err(ReflectError::NumberOutOfRange {
                            number,
                            shape: <$ty as Shaped>::SHAPE,
                        }),
                    }
                }
            }
        )*
    };
}

impl_integer!(
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
);

impl_scalar!(bool, ScalarAffinity::Boolean, |this| Poke::Bool(this));
impl_scalar!(f32, ScalarAffinity::Float, |_this| Poke::Opaque);
impl_scalar!(f64, ScalarAffinity::Float, |_this| Poke::Opaque);
impl_scalar!(char, ScalarAffinity::Char, |_this| Poke::Opaque);
impl_scalar!((), ScalarAffinity::Unit, |_this| Poke::Opaque);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;

    #[test]
    fn truncates_toward_zero() {
        let mut n = 0i64;
        n.set_truncated(30.9).unwrap();
        assert_eq!(n, 30);
        n.set_truncated(-30.9).unwrap();
        assert_eq!(n, -30);
    }

    #[test]
    fn rejects_out_of_range_and_keeps_old_value() {
        let mut n = 7u8;
        let err = n.set_truncated(256.0).unwrap_err();
        assert!(matches!(err, ReflectError::NumberOutOfRange { number, .. } if number == 256.0));
        assert_eq!(n, 7);

        assert!(n.set_truncated(-1.0).is_err());
        assert!(n.set_truncated(f64::NAN).is_err());
        assert!(n.set_truncated(f64::INFINITY).is_err());
        assert_eq!(n, 7);
    }

    #[test]
    fn fractional_negatives_truncate_into_unsigned_zero() {
        let mut n = 5u32;
        n.set_truncated(-0.5).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn scalar_shapes() {
        assert_eq!(i32::SHAPE.to_string(), "i32");
        assert!(matches!(
            usize::SHAPE.def,
            crate::Def::Scalar(sd) if sd.affinity == ScalarAffinity::Integer { signed: false, bits: usize::BITS }
        ));
        let mut f = 1.5f64;
        assert!(matches!(f.poke(), Poke::Opaque));
        let mut b = false;
        match b.poke() {
            Poke::Bool(b) => *b = true,
            _ => panic!("bool should poke as Bool"),
        }
        assert!(b);
    }
}
