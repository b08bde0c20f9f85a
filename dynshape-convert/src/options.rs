/// What to do with a struct field whose kind the converter can't write
/// (floats, chars, options, maps, ...) when its key is present in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedFields {
    /// Leave the field untouched and carry on
    #[default]
    Ignore,
    /// Fail with [`ConvertError::UnsupportedField`](crate::ConvertError::UnsupportedField)
    Reject,
}

/// Limits and behavior switches for [`convert_with`](crate::convert_with).
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Maximum nesting of struct and sequence destinations, the outermost one
    /// included.
    pub max_depth: usize,
    /// Policy for fields the converter can't write.
    pub unsupported_fields: UnsupportedFields,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            unsupported_fields: UnsupportedFields::Ignore,
        }
    }
}

impl ConvertOptions {
    /// Sets [`ConvertOptions::max_depth`]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets [`ConvertOptions::unsupported_fields`]
    pub fn with_unsupported_fields(mut self, policy: UnsupportedFields) -> Self {
        self.unsupported_fields = policy;
        self
    }
}
