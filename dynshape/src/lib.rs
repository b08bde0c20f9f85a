#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub use dynshape_core::*;

/// Derives [`Shaped`], [`Reflect`] and [`PokeStruct`] for a struct.
///
/// Works on structs with named fields, tuple structs and unit structs whose
/// fields are all [`Shaped`]. Fields are exposed in declaration order, under
/// their Rust names (tuple fields as `"0"`, `"1"`, ...).
///
/// ```rust
/// # use dynshape::Reflect;
/// #[derive(Reflect, Default)]
/// struct FooBar {
///     foo: u32,
///     bar: String,
/// }
/// ```
///
/// Enums, unions and generic structs are rejected at compile time. Attributes
/// on the struct and its fields are accepted and ignored.
pub use dynshape_macros::Reflect;
