#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod parse;
pub use parse::*;

mod derive;
pub use derive::*;
