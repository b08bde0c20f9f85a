use dynshape_core::{Def, Reflect, ReflectError};
use log::trace;

use crate::converter::Converter;
use crate::{ConvertError, PathStep, Value, ValueKind};

impl Converter<'_> {
    /// Fills a `Vec<T>` or `[T; N]` from the items of an array, in order.
    pub(crate) fn convert_array(
        &mut self,
        data: &Value,
        dest: &mut dyn Reflect,
    ) -> Result<(), ConvertError> {
        let shape = dest.shape();
        let Value::Array(items) = data else {
            return Err(ConvertError::ShapeMismatch {
                path: self.path.clone(),
                expected: ValueKind::Array,
                got: data.kind(),
            });
        };
        trace!("{}: {} <- {} items", self.path, shape, items.len());

        match shape.def {
            Def::List(_) => {
                let list = dest.poke_list()?;
                for (index, item) in items.iter().enumerate() {
                    // The new element stays in the list even if filling it fails.
                    let slot = list.push_default();
                    self.descend(PathStep::Index(index), |this| this.dispatch(item, slot))?;
                }
                Ok(())
            }
            Def::Array(ad) => {
                if items.len() > ad.n {
                    return Err(ConvertError::ArrayOverflow {
                        path: self.path.clone(),
                        capacity: ad.n,
                        got: items.len(),
                    });
                }
                let array = dest.poke_array()?;
                let size = array.len();
                for (index, item) in items.iter().enumerate() {
                    let slot = array
                        .reset_element(index)
                        .ok_or(ReflectError::ArrayIndexOutOfBounds { shape, index, size })?;
                    self.descend(PathStep::Index(index), |this| this.dispatch(item, slot))?;
                }
                Ok(())
            }
            _ => Err(ConvertError::UnsupportedShape {
                shape,
                path: self.path.clone(),
            }),
        }
    }
}
