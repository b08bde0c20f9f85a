use crate::{Map, Value};

/// Finds the entry whose key equals `name` exactly.
///
/// Case-sensitive, no normalization. Object keys are unique, so there is at
/// most one match.
pub fn find_key<'a>(object: &'a Map, name: &str) -> Option<(&'a str, &'a Value)> {
    object
        .get_key_value(name)
        .map(|(key, value)| (key.as_str(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let mut object = Map::new();
        object.insert("Name".into(), Value::from("a"));
        object.insert("name ".into(), Value::from("b"));

        assert_eq!(find_key(&object, "Name"), Some(("Name", &Value::from("a"))));
        assert_eq!(find_key(&object, "name"), None);
        assert_eq!(find_key(&object, "NAME"), None);
        assert_eq!(find_key(&object, ""), None);
    }
}
