#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub use dynshape_value::{Map, Value, ValueKind};

mod error;
pub use error::*;

mod options;
pub use options::*;

mod path;
pub use path::*;

mod lookup;
pub use lookup::*;

mod converter;
pub use converter::*;

mod array;
mod record;
