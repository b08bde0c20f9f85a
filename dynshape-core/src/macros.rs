/// Implements [`Shaped`](crate::Shaped) and [`Reflect`](crate::Reflect) for a
/// non-generic scalar type.
///
/// The `poke` arm receives `self` (named by the caller) and builds the
/// [`Poke`](crate::Poke) for it.
macro_rules! impl_scalar {
    ($ty:ty, $affinity:expr, |$this:ident| $poke:expr) => {
        impl $crate::Shaped for $ty {
            const SHAPE: &'static $crate::Shape = &const {
                $crate::Shape::new(
                    stringify!($ty),
                    $crate::Def::Scalar($crate::ScalarDef::new($affinity)),
                )
            };
        }

        impl $crate::Reflect for $ty {
            fn shape(&self) -> &'static $crate::Shape {
                <Self as $crate::Shaped>::SHAPE
            }

            fn poke(&mut self) -> $crate::Poke<'_> {
                let $this = self;
                $poke
            }
        }
    };
}

pub(crate) use impl_scalar;
