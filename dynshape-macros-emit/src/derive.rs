use proc_macro2::Literal;
use quote::quote;
use unsynn::*;

use crate::parse::{AdtDecl, Struct, StructKind};

/// Entry point of `#[derive(Reflect)]`.
pub fn reflect_derive(input: TokenStream) -> TokenStream {
    let mut it = input.to_token_iter();
    match it.parse::<AdtDecl>() {
        Ok(AdtDecl::Struct(parsed)) => process_struct(parsed),
        Ok(AdtDecl::Enum(parsed)) => compile_error(&format!(
            "#[derive(Reflect)] only supports structs, but `{}` is an enum",
            parsed.fourth
        )),
        Ok(AdtDecl::Union(parsed)) => compile_error(&format!(
            "#[derive(Reflect)] only supports structs, but `{}` is a union",
            parsed.fourth
        )),
        Err(err) => compile_error(&format!("#[derive(Reflect)] could not parse input: {err}")),
    }
}

fn compile_error(message: &str) -> TokenStream {
    quote! { ::core::compile_error!(#message); }
}

/// Emits `Shaped`, `Reflect` and `PokeStruct` impls for a struct.
pub(crate) fn process_struct(parsed: Struct) -> TokenStream {
    let name = &parsed.name;
    if parsed.generics.is_some() {
        return compile_error(&format!(
            "#[derive(Reflect)] does not support generic structs (`{name}`)"
        ));
    }
    let name_str = name.to_string();

    let kind = match &parsed.kind {
        StructKind::Struct { .. } => quote! { ::dynshape::StructKind::Struct },
        StructKind::TupleStruct { .. } => quote! { ::dynshape::StructKind::TupleStruct },
        StructKind::UnitStruct { .. } => quote! { ::dynshape::StructKind::Unit },
    };

    let fields = parsed.fields();

    let field_defs = fields.iter().map(|(field_name, ty)| {
        quote! { ::dynshape::Field::new(#field_name, ::dynshape::shape_of::<#ty>) }
    });
    let fields_array = if fields.is_empty() {
        quote! { &[] }
    } else {
        quote! { &const { [#(#field_defs),*] } }
    };

    // Tuple fields are accessed as `self.0`, named ones by their identifier
    // (raw identifiers included).
    let accessors: Vec<TokenStream> = match &parsed.kind {
        StructKind::Struct { fields, .. } => fields
            .content
            .0
            .iter()
            .map(|field| field.value.name.to_token_stream())
            .collect(),
        StructKind::TupleStruct { .. } => (0..fields.len())
            .map(|index| Literal::usize_unsuffixed(index).to_token_stream())
            .collect(),
        StructKind::UnitStruct { .. } => Vec::new(),
    };
    let arms = accessors.iter().enumerate().map(|(index, access)| {
        quote! { #index => ::core::option::Option::Some(&mut self.#access), }
    });

    quote! {
        #[automatically_derived]
        impl ::dynshape::Shaped for #name {
            const SHAPE: &'static ::dynshape::Shape = &const {
                ::dynshape::Shape::new(
                    #name_str,
                    ::dynshape::Def::Struct(::dynshape::StructDef::new(#kind, #fields_array)),
                )
            };
        }

        #[automatically_derived]
        impl ::dynshape::Reflect for #name {
            fn shape(&self) -> &'static ::dynshape::Shape {
                <Self as ::dynshape::Shaped>::SHAPE
            }

            fn poke(&mut self) -> ::dynshape::Poke<'_> {
                ::dynshape::Poke::Struct(self)
            }
        }

        #[automatically_derived]
        impl ::dynshape::PokeStruct for #name {
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::dynshape::Reflect> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        reflect_derive(input).to_string()
    }

    #[test]
    fn named_struct_gets_all_three_impls() {
        let out = expand(quote! {
            struct Person {
                Name: String,
                Age: i64,
            }
        });
        assert!(!out.contains("compile_error"), "{out}");
        assert!(out.contains(":: dynshape :: Shaped for Person"), "{out}");
        assert!(out.contains(":: dynshape :: Reflect for Person"), "{out}");
        assert!(out.contains(":: dynshape :: PokeStruct for Person"), "{out}");
        assert!(out.contains("\"Name\""), "{out}");
        assert!(out.contains("\"Age\""), "{out}");
        assert!(out.contains("self . Age"), "{out}");
        assert!(out.contains("StructKind :: Struct"), "{out}");
    }

    #[test]
    fn tuple_struct_accesses_fields_by_index() {
        let out = expand(quote! { struct Pair(i64, String); });
        assert!(out.contains("StructKind :: TupleStruct"), "{out}");
        assert!(out.contains("self . 0"), "{out}");
        assert!(out.contains("self . 1"), "{out}");
        assert!(out.contains("\"1\""), "{out}");
    }

    #[test]
    fn unit_struct_has_an_empty_field_list() {
        let out = expand(quote! { struct Marker; });
        assert!(out.contains("StructKind :: Unit"), "{out}");
        assert!(!out.contains("Field :: new"), "{out}");
        assert!(!out.contains("compile_error"), "{out}");
    }

    #[test]
    fn raw_identifier_keeps_access_but_not_key() {
        let out = expand(quote! { struct Token { r#type: String } });
        assert!(out.contains("\"type\""), "{out}");
        assert!(out.contains("self . r#type"), "{out}");
    }

    #[test]
    fn enums_unions_and_generics_are_rejected() {
        for input in [
            quote! { enum Color { Red, Green } },
            quote! { union Bits { a: u32, b: f32 } },
            quote! { struct Wrapper<T> { inner: T } },
        ] {
            let out = expand(input);
            assert!(out.contains("compile_error"), "{out}");
        }
    }

    #[test]
    fn garbage_is_reported_not_panicked_on() {
        let out = expand(quote! { fn not_a_type() {} });
        assert!(out.contains("compile_error"), "{out}");
    }
}
