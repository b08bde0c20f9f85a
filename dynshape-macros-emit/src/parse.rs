//! Grammar for the items `#[derive(Reflect)]` is applied to.

use unsynn::*;

keyword! {
    /// The "struct" keyword.
    pub KStruct = "struct";
    /// The "enum" keyword.
    pub KEnum = "enum";
    /// The "union" keyword.
    pub KUnion = "union";
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "where" keyword.
    pub KWhere = "where";
}

/// Parses tokens up to (not including) `C`, treating `<...>` as one unit so
/// that `HashMap<K, V>` isn't cut at its comma.
pub type VerbatimUntil<C> = Many<Cons<Except<C>, AngleTokenTree>>;

unsynn! {
    /// Parses either a `TokenTree` or `<...>` grouping (which is not a [`Group`] as far as proc-macros
    /// are concerned).
    #[derive(Clone)]
    pub struct AngleTokenTree(
        #[allow(clippy::type_complexity)]
        pub Either<Cons<Lt, Any<Cons<Except<Gt>, AngleTokenTree>>, Gt>, TokenTree>,
    );

    /// An outer attribute: `#[...]`. The contents are not interpreted.
    pub struct Attribute {
        /// The `#`
        pub _pound: PunctAny<'#'>,
        /// The bracketed contents
        pub body: BracketGroup,
    }

    /// `pub`, `pub(crate)`, `pub(in some::path)`
    pub struct Vis {
        /// The `pub` keyword
        pub _pub: KPub,
        /// Optional restriction
        pub _restriction: Option<ParenthesisGroup>,
    }

    /// Generic parameters. Only parsed so they can be rejected.
    pub struct GenericParams {
        /// Opening angle bracket
        pub _lt: Lt,
        /// Everything up to the matching closing bracket
        pub params: Any<Cons<Except<Gt>, AngleTokenTree>>,
        /// Closing angle bracket
        pub _gt: Gt,
    }

    /// `where ...` up to the struct body or the final semicolon
    pub struct WhereClauses {
        /// The `where` keyword
        pub _kw_where: KWhere,
        /// The clauses themselves
        pub clauses: Many<Cons<Except<Either<BraceGroup, Semicolon>>, TokenTree>>,
    }

    /// A type declaration the derive was applied to
    pub enum AdtDecl {
        /// A struct
        Struct(Struct),
        /// An enum (unsupported)
        Enum(Cons<Any<Attribute>, Option<Vis>, KEnum, Ident>),
        /// A union (unsupported)
        Union(Cons<Any<Attribute>, Option<Vis>, KUnion, Ident>),
    }

    /// A struct declaration
    pub struct Struct {
        /// Attributes, including doc comments
        pub attributes: Any<Attribute>,
        /// Visibility
        pub _vis: Option<Vis>,
        /// The `struct` keyword
        pub _kw_struct: KStruct,
        /// The struct name
        pub name: Ident,
        /// Generic parameters, if any
        pub generics: Option<GenericParams>,
        /// Named, tuple or unit body
        pub kind: StructKind,
    }

    /// The body of a struct
    pub enum StructKind {
        /// `struct Person { name: String }`
        Struct {
            /// Where clauses, if any
            clauses: Option<WhereClauses>,
            /// The fields
            fields: BraceGroupContaining<CommaDelimitedVec<StructField>>,
        },
        /// `struct Meters(u32);`
        TupleStruct {
            /// The fields
            fields: ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>,
            /// Where clauses, if any
            clauses: Option<WhereClauses>,
            /// Trailing semicolon
            semi: Semicolon,
        },
        /// `struct Marker;`
        UnitStruct {
            /// Where clauses, if any
            clauses: Option<WhereClauses>,
            /// Trailing semicolon
            semi: Semicolon,
        },
    }

    /// A named field
    pub struct StructField {
        /// Attributes, including doc comments
        pub attributes: Any<Attribute>,
        /// Visibility
        pub _vis: Option<Vis>,
        /// Field name
        pub name: Ident,
        /// Colon separator
        pub _colon: Colon,
        /// Field type (everything until comma or end)
        pub typ: VerbatimUntil<Comma>,
    }

    /// A tuple struct field
    pub struct TupleField {
        /// Attributes, including doc comments
        pub attributes: Any<Attribute>,
        /// Visibility
        pub _vis: Option<Vis>,
        /// Field type (everything until comma or end)
        pub typ: VerbatimUntil<Comma>,
    }
}

impl Struct {
    /// Field names and types, in declaration order. Tuple fields are named
    /// by index; raw identifiers lose their `r#` prefix.
    pub fn fields(&self) -> Vec<(String, TokenStream)> {
        match &self.kind {
            StructKind::Struct { fields, .. } => fields
                .content
                .0
                .iter()
                .map(|field| {
                    let name = field.value.name.to_string();
                    let name = name.strip_prefix("r#").map(str::to_owned).unwrap_or(name);
                    (name, field.value.typ.to_token_stream())
                })
                .collect(),
            StructKind::TupleStruct { fields, .. } => fields
                .content
                .0
                .iter()
                .enumerate()
                .map(|(index, field)| (index.to_string(), field.value.typ.to_token_stream()))
                .collect(),
            StructKind::UnitStruct { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse_struct(input: TokenStream) -> Struct {
        let mut it = input.to_token_iter();
        match it.parse::<AdtDecl>() {
            Ok(AdtDecl::Struct(parsed)) => parsed,
            Ok(_) => panic!("expected a struct"),
            Err(err) => panic!("failed to parse: {err}"),
        }
    }

    fn field_strings(parsed: &Struct) -> Vec<(String, String)> {
        parsed
            .fields()
            .into_iter()
            .map(|(name, ty)| (name, ty.to_string()))
            .collect()
    }

    #[test]
    fn named_fields_keep_declaration_order() {
        let parsed = parse_struct(quote! {
            /// A person
            #[derive(Debug, Default)]
            pub struct Person {
                /// Their name
                pub Name: String,
                pub(crate) Age: i64,
                Active: bool,
            }
        });
        assert_eq!(parsed.name.to_string(), "Person");
        assert!(parsed.generics.is_none());
        assert_eq!(
            field_strings(&parsed),
            [
                ("Name".to_string(), "String".to_string()),
                ("Age".to_string(), "i64".to_string()),
                ("Active".to_string(), "bool".to_string()),
            ]
        );
    }

    #[test]
    fn commas_inside_angle_brackets_stay_in_the_type() {
        let parsed = parse_struct(quote! {
            struct Lookup {
                table: HashMap<String, Vec<u8>>,
                fixed: [u8; 4],
            }
        });
        let fields = field_strings(&parsed);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "table");
        assert_eq!(fields[0].1.replace(' ', ""), "HashMap<String,Vec<u8>>");
        assert_eq!(fields[1].1.replace(' ', ""), "[u8;4]");
    }

    #[test]
    fn tuple_fields_are_named_by_index() {
        let parsed = parse_struct(quote! {
            pub struct Pair(pub i32, String);
        });
        assert!(matches!(parsed.kind, StructKind::TupleStruct { .. }));
        assert_eq!(
            field_strings(&parsed),
            [
                ("0".to_string(), "i32".to_string()),
                ("1".to_string(), "String".to_string()),
            ]
        );
    }

    #[test]
    fn unit_struct_has_no_fields() {
        let parsed = parse_struct(quote! { struct Marker; });
        assert!(matches!(parsed.kind, StructKind::UnitStruct { .. }));
        assert!(parsed.fields().is_empty());
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        let parsed = parse_struct(quote! {
            struct Token { r#type: String }
        });
        assert_eq!(parsed.fields()[0].0, "type");
    }

    #[test]
    fn generics_are_detected() {
        let parsed = parse_struct(quote! {
            struct Wrapper<T: Clone> { inner: T }
        });
        assert!(parsed.generics.is_some());
    }

    #[test]
    fn enums_are_recognized() {
        let tokens = quote! { pub enum Color { Red, Green } };
        let mut it = tokens.to_token_iter();
        match it.parse::<AdtDecl>() {
            Ok(AdtDecl::Enum(decl)) => assert_eq!(decl.fourth.to_string(), "Color"),
            _ => panic!("expected an enum"),
        }
    }
}
