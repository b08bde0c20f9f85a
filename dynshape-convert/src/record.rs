use dynshape_core::{Def, Field, Reflect, ReflectError, ScalarAffinity, Shape};
use log::trace;

use crate::converter::Converter;
use crate::{ConvertError, PathStep, UnsupportedFields, Value, ValueKind, find_key};

impl Converter<'_> {
    /// Fills the fields of a struct from the entries of an object, in field
    /// declaration order.
    pub(crate) fn convert_record(
        &mut self,
        data: &Value,
        dest: &mut dyn Reflect,
    ) -> Result<(), ConvertError> {
        let shape = dest.shape();
        let Def::Struct(sd) = shape.def else {
            return Err(ConvertError::UnsupportedShape {
                shape,
                path: self.path.clone(),
            });
        };
        let Value::Object(object) = data else {
            return Err(ConvertError::ShapeMismatch {
                path: self.path.clone(),
                expected: ValueKind::Object,
                got: data.kind(),
            });
        };
        trace!(
            "{}: {} with {} fields, object with {} keys",
            self.path,
            shape,
            sd.fields.len(),
            object.len()
        );

        let fields = dest.poke_struct()?;
        for (index, field) in sd.fields.iter().enumerate() {
            let Some((_, value)) = find_key(object, field.name) else {
                trace!("{}.{}: no such key, skipping", self.path, field.name);
                continue;
            };
            let slot = fields
                .field_mut(index)
                .ok_or(ReflectError::FieldIndexOutOfBounds { shape, index })?;
            self.descend(PathStep::Field(field.name), |this| {
                this.convert_field(field, value, slot)
            })?;
        }
        Ok(())
    }

    fn convert_field(
        &mut self,
        field: &Field,
        value: &Value,
        slot: &mut dyn Reflect,
    ) -> Result<(), ConvertError> {
        let shape = field.shape();
        trace!("{}: {} <- {}", self.path, shape, value.kind());

        match shape.def {
            Def::Scalar(sd) => match sd.affinity {
                ScalarAffinity::Integer { .. } => {
                    let Value::Number(number) = value else {
                        return Err(self.type_mismatch(field, ValueKind::Number, value));
                    };
                    slot.poke_integer()?
                        .set_truncated(*number)
                        .map_err(|err| self.out_of_range(field, err))
                }
                ScalarAffinity::String => {
                    let Value::String(s) = value else {
                        return Err(self.type_mismatch(field, ValueKind::String, value));
                    };
                    *slot.poke_string()? = s.clone();
                    Ok(())
                }
                ScalarAffinity::Boolean => {
                    let Value::Bool(b) = value else {
                        return Err(self.type_mismatch(field, ValueKind::Bool, value));
                    };
                    *slot.poke_bool()? = *b;
                    Ok(())
                }
                _ => self.unsupported_field(field, shape),
            },
            Def::List(_) | Def::Array(_) => {
                if !matches!(value, Value::Array(_)) {
                    return Err(self.type_mismatch(field, ValueKind::Array, value));
                }
                self.dispatch(value, slot)
            }
            Def::Struct(_) => {
                if !matches!(value, Value::Object(_)) {
                    return Err(self.type_mismatch(field, ValueKind::Object, value));
                }
                self.dispatch(value, slot)
            }
            _ => self.unsupported_field(field, shape),
        }
    }

    fn type_mismatch(&self, field: &Field, expected: ValueKind, got: &Value) -> ConvertError {
        ConvertError::TypeMismatch {
            field: field.name,
            path: self.path.clone(),
            expected,
            got: got.kind(),
        }
    }

    fn out_of_range(&self, field: &Field, err: ReflectError) -> ConvertError {
        match err {
            ReflectError::NumberOutOfRange { number, shape } => ConvertError::NumberOutOfRange {
                field: field.name,
                path: self.path.clone(),
                number,
                shape,
            },
            other => ConvertError::Reflect(other),
        }
    }

    fn unsupported_field(&self, field: &Field, shape: &'static Shape) -> Result<(), ConvertError> {
        match self.options.unsupported_fields {
            UnsupportedFields::Ignore => {
                trace!("{}: {} is not supported, ignoring", self.path, shape);
                Ok(())
            }
            UnsupportedFields::Reject => Err(ConvertError::UnsupportedField {
                field: field.name,
                path: self.path.clone(),
                shape,
            }),
        }
    }
}
