use dynshape_core::{Def, PointerKind, Reflect, Shaped};
use log::debug;

use crate::{ConvertError, ConvertOptions, Path, PathStep, Value};

/// Populates the value behind `dest` from `data`, with default options.
///
/// `dest` must be a mutable reference to a struct, a `Vec<T>` or a `[T; N]`.
/// Anything passed by value is rejected with [`ConvertError::NotAReference`],
/// whatever the data: the converter only ever fills a value the caller owns,
/// it never builds one.
///
/// ```rust
/// # use dynshape::Reflect;
/// # use dynshape_convert::{ConvertError, Value, convert};
/// #[derive(Reflect, Default)]
/// struct Point { x: i64, y: i64 }
///
/// let data: Value = [("x", 1.0), ("y", 2.0)].into_iter().collect();
///
/// let mut point = Point::default();
/// convert(&data, &mut point).unwrap();
/// assert_eq!((point.x, point.y), (1, 2));
///
/// let err = convert(&data, Point::default()).unwrap_err();
/// assert!(matches!(err, ConvertError::NotAReference { .. }));
/// ```
pub fn convert<D: Shaped>(data: &Value, dest: D) -> Result<(), ConvertError> {
    convert_with(data, dest, &ConvertOptions::default())
}

/// Same as [`convert`], with explicit [`ConvertOptions`].
pub fn convert_with<D: Shaped>(
    data: &Value,
    mut dest: D,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let shape = D::SHAPE;
    match shape.def {
        Def::Pointer(pd) if pd.kind == PointerKind::MutRef => {}
        _ => return Err(ConvertError::NotAReference { shape }),
    }
    debug!("Converting {} into {}", data.kind(), shape);

    let dest: &mut dyn Reflect = &mut dest;
    let target = dest.poke_pointer()?;
    Converter::new(options).dispatch(data, target)
}

/// Fills a struct from an object, with default options.
///
/// Fails with [`ConvertError::UnsupportedShape`] if `dest` isn't a struct.
pub fn convert_record(data: &Value, dest: &mut dyn Reflect) -> Result<(), ConvertError> {
    let shape = dest.shape();
    if !shape.is_struct() {
        return Err(ConvertError::UnsupportedShape {
            shape,
            path: Path::root(),
        });
    }
    Converter::new(&ConvertOptions::default()).dispatch(data, dest)
}

/// Fills a `Vec<T>` or `[T; N]` from an array, with default options.
///
/// Fails with [`ConvertError::UnsupportedShape`] if `dest` isn't a sequence.
pub fn convert_array(data: &Value, dest: &mut dyn Reflect) -> Result<(), ConvertError> {
    let shape = dest.shape();
    if !shape.is_sequence() {
        return Err(ConvertError::UnsupportedShape {
            shape,
            path: Path::root(),
        });
    }
    Converter::new(&ConvertOptions::default()).dispatch(data, dest)
}

/// State of one conversion call.
pub(crate) struct Converter<'opts> {
    pub(crate) options: &'opts ConvertOptions,
    /// Path of the destination currently being written
    pub(crate) path: Path,
    /// Number of struct/sequence destinations entered and not yet left
    depth: usize,
}

impl<'opts> Converter<'opts> {
    pub(crate) fn new(options: &'opts ConvertOptions) -> Self {
        Self {
            options,
            path: Path::root(),
            depth: 0,
        }
    }

    /// Sends `dest` to record or array conversion based on its shape.
    pub(crate) fn dispatch(
        &mut self,
        data: &Value,
        dest: &mut dyn Reflect,
    ) -> Result<(), ConvertError> {
        let shape = dest.shape();
        if !shape.is_struct() && !shape.is_sequence() {
            return Err(ConvertError::UnsupportedShape {
                shape,
                path: self.path.clone(),
            });
        }
        if self.depth >= self.options.max_depth {
            return Err(ConvertError::DepthExceeded {
                path: self.path.clone(),
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = if shape.is_struct() {
            self.convert_record(data, dest)
        } else {
            self.convert_array(data, dest)
        };
        self.depth -= 1;
        result
    }

    /// Runs `f` with `step` appended to the current path. The step stays on
    /// the path if `f` fails.
    pub(crate) fn descend<T>(
        &mut self,
        step: PathStep,
        f: impl FnOnce(&mut Self) -> Result<T, ConvertError>,
    ) -> Result<T, ConvertError> {
        self.path.push(step);
        let value = f(self)?;
        self.path.pop();
        Ok(value)
    }
}
