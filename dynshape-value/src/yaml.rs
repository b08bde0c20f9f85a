//! Hand-off from `yaml-rust2`.

use alloc::string::{String, ToString};
use core::fmt;

use yaml_rust2::Yaml;

use crate::{Map, Value};

/// A YAML node that has no [`Value`] counterpart
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FromYamlError {
    /// Hash keys must be strings
    NonStringKey {
        /// What the key was
        got: &'static str,
    },
    /// A real number that doesn't parse as `f64`
    BadReal {
        /// The raw text
        raw: String,
    },
    /// Aliases are resolved by the loader; seeing one here means they weren't
    Alias,
    /// The loader produced `BadValue`
    BadValue,
}

impl fmt::Display for FromYamlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FromYamlError::NonStringKey { got } => write!(f, "Expected string key, got: {got}"),
            FromYamlError::BadReal { raw } => write!(f, "Could not parse real number {raw:?}"),
            FromYamlError::Alias => write!(f, "Unresolved YAML alias"),
            FromYamlError::BadValue => write!(f, "Bad YAML value"),
        }
    }
}

impl core::error::Error for FromYamlError {}

fn yaml_type(ty: &Yaml) -> &'static str {
    match ty {
        Yaml::Real(_) => "real number",
        Yaml::Integer(_) => "integer",
        Yaml::String(_) => "string",
        Yaml::Boolean(_) => "boolean",
        Yaml::Array(_) => "array",
        Yaml::Hash(_) => "hash/map",
        Yaml::Alias(_) => "alias",
        Yaml::Null => "null",
        Yaml::BadValue => "bad value",
    }
}

impl TryFrom<Yaml> for Value {
    type Error = FromYamlError;

    fn try_from(yaml: Yaml) -> Result<Self, Self::Error> {
        Ok(match yaml {
            Yaml::Null => Value::Null,
            Yaml::Boolean(b) => Value::Bool(b),
            Yaml::Integer(i) => Value::Number(i as f64),
            Yaml::Real(ref raw) => match yaml.as_f64() {
                Some(n) => Value::Number(n),
                None => return Err(FromYamlError::BadReal { raw: raw.to_string() }),
            },
            Yaml::String(s) => Value::String(s),
            Yaml::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Yaml::Hash(hash) => {
                let mut map = Map::new();
                for (k, v) in hash {
                    let key = match k {
                        Yaml::String(key) => key,
                        other => {
                            return Err(FromYamlError::NonStringKey {
                                got: yaml_type(&other),
                            });
                        }
                    };
                    map.insert(key, Value::try_from(v)?);
                }
                Value::Object(map)
            }
            Yaml::Alias(_) => return Err(FromYamlError::Alias),
            Yaml::BadValue => return Err(FromYamlError::BadValue),
        })
    }
}
