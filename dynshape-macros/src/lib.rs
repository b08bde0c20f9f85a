#![doc = include_str!("../README.md")]

/// Derives `Shaped`, `Reflect` and `PokeStruct` for a struct.
#[proc_macro_derive(Reflect)]
pub fn reflect_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    dynshape_macros_emit::reflect_derive(input.into()).into()
}
