#![allow(non_snake_case)]

use dynshape::Reflect;
use dynshape_convert::{ConvertError, Value, convert};
use eyre::Result;
use yaml_rust2::YamlLoader;

#[derive(Debug, Default, PartialEq, Reflect)]
struct Inner {
    X: i64,
}

#[derive(Debug, Default, PartialEq, Reflect)]
struct Document {
    Name: String,
    Age: i64,
    Active: bool,
    Inner: Inner,
    Items: Vec<Inner>,
}

fn expected() -> Document {
    Document {
        Name: "Alice".to_string(),
        Age: 30,
        Active: true,
        Inner: Inner { X: 1 },
        Items: vec![Inner { X: 1 }, Inner { X: 2 }],
    }
}

#[test]
fn from_json_text() -> Result<()> {
    dynshape_testhelpers::setup();

    let text = r#"{
        "Name": "Alice",
        "Age": 30.75,
        "Active": true,
        "Inner": {"X": 1},
        "Items": [{"X": 1}, {"X": 2}],
        "Unknown": null
    }"#;
    let data = Value::from(serde_json::from_str::<serde_json::Value>(text)?);

    let mut doc = Document::default();
    convert(&data, &mut doc)?;
    assert_eq!(doc, expected());
    Ok(())
}

#[test]
fn from_yaml_text() -> Result<()> {
    dynshape_testhelpers::setup();

    let mut docs = YamlLoader::load_from_str(
        r#"
        Name: Alice
        Age: 30
        Active: true
        Inner:
          X: 1.2
        Items:
          - X: 1
          - X: 2
        "#,
    )?;
    let data = Value::try_from(docs.remove(0))?;

    let mut doc = Document::default();
    convert(&data, &mut doc)?;
    assert_eq!(doc, expected());
    Ok(())
}

#[test]
fn yaml_scalars_keep_their_kind() -> Result<()> {
    dynshape_testhelpers::setup();

    // Quoted, so it stays a string and doesn't fit `Age`.
    let mut docs = YamlLoader::load_from_str("Age: '30'")?;
    let data = Value::try_from(docs.remove(0))?;

    let mut doc = Document::default();
    let err = convert(&data, &mut doc).unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch { field: "Age", .. }));
    Ok(())
}
