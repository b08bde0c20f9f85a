use alloc::vec::Vec;
use core::fmt;

/// One step from a parent destination into a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    /// A struct field, by name
    Field(&'static str),
    /// A sequence element, by index
    Index(usize),
}

/// Where in the destination something happened, e.g. `$.Inner.X[2]`.
///
/// `$` is the destination itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The path of the destination itself
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Steps from the root, outermost first
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Returns true for the destination itself
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    pub(crate) fn pop(&mut self) {
        self.steps.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            match step {
                PathStep::Field(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
