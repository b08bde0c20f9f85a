#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod macros;

// Shape descriptions
mod types;
pub use types::*;

// Write access to reflected values
mod poke;
pub use poke::*;

mod error;
pub use error::*;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
#[cfg(feature = "std")]
mod impls_std;

/// Gives a type a static [`Shape`], which describes whether it is a struct, a
/// list, a scalar, etc.
///
/// Every field of a type deriving `Reflect` must itself be `Shaped`.
pub trait Shaped: Reflect + Sized {
    /// The shape of this type
    const SHAPE: &'static Shape;
}

/// Dynamic access to a value whose type implements [`Shaped`].
///
/// This is the dyn-compatible half of the reflection seam: the converter only
/// ever holds `&mut dyn Reflect`, asks it for its shape, and pokes into it.
pub trait Reflect {
    /// The static shape of the underlying type.
    fn shape(&self) -> &'static Shape;

    /// Borrows the value mutably, as whatever kind of thing its shape says it is.
    fn poke(&mut self) -> Poke<'_>;
}

/// Returns the shape of `T`.
///
/// Usable as a [`ShapeFn`], which is how fields, lists and pointers refer to
/// the shapes of what they contain without evaluating them eagerly.
pub const fn shape_of<T: Shaped>() -> &'static Shape {
    T::SHAPE
}
