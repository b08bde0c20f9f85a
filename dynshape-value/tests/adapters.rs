#![cfg(any(feature = "json", feature = "yaml"))]

use dynshape_value::{Value, ValueKind};

#[cfg(feature = "json")]
#[test]
fn from_serde_json_widens_numbers() {
    dynshape_testhelpers::setup();

    let json = serde_json::json!({
        "Name": "a",
        "Age": 30,
        "Ratio": 0.25,
        "Tags": ["x", null, false],
    });
    let value = Value::from(json);

    assert_eq!(value.kind(), ValueKind::Object);
    assert_eq!(value.get("Name"), Some(&Value::from("a")));
    assert_eq!(value.get("Age"), Some(&Value::Number(30.0)));
    assert_eq!(value.get("Ratio"), Some(&Value::Number(0.25)));
    assert_eq!(
        value.get("Tags"),
        Some(&Value::Array(vec![
            Value::from("x"),
            Value::Null,
            Value::Bool(false)
        ]))
    );
}

#[cfg(feature = "yaml")]
mod yaml {
    use super::*;
    use dynshape_value::FromYamlError;
    use eyre::Result;
    use yaml_rust2::YamlLoader;

    fn load(src: &str) -> Result<Value> {
        let mut docs = YamlLoader::load_from_str(src)?;
        assert_eq!(docs.len(), 1, "expected exactly one YAML document");
        Ok(Value::try_from(docs.remove(0))?)
    }

    #[test]
    fn from_yaml_document() -> Result<()> {
        dynshape_testhelpers::setup();

        let value = load(
            r#"
            Name: Alice
            Age: 30
            Height: 1.75
            Active: true
            Inner:
              X: 1
            Items:
              - X: 1
              - X: 2
            "#,
        )?;

        assert_eq!(value.get("Name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(value.get("Age").and_then(Value::as_f64), Some(30.0));
        assert_eq!(value.get("Height").and_then(Value::as_f64), Some(1.75));
        assert_eq!(value.get("Active").and_then(Value::as_bool), Some(true));
        assert_eq!(
            value.get("Inner").and_then(|v| v.get("X")),
            Some(&Value::Number(1.0))
        );
        assert_eq!(value.get("Items").and_then(Value::as_array).map(<[_]>::len), Some(2));
        Ok(())
    }

    #[test]
    fn non_string_keys_are_rejected() -> Result<()> {
        dynshape_testhelpers::setup();

        let mut docs = YamlLoader::load_from_str("1: one")?;
        let err = Value::try_from(docs.remove(0)).unwrap_err();
        assert_eq!(err, FromYamlError::NonStringKey { got: "integer" });
        Ok(())
    }
}
