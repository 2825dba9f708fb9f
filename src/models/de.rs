//! Lenient deserializers for request fields.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

/// Optional id given as a JSON number or a numeric string. A blank string counts as absent.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdValue::Number(id)) => Ok(Some(id)),
        Some(IdValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a numeric id, got {:?}", text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional_id")]
        id: Option<i64>,
    }

    fn id(json: &str) -> Result<Option<i64>, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.id)
    }

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(id(r#"{"id":3}"#).unwrap(), Some(3));
        assert_eq!(id(r#"{"id":" 12 "}"#).unwrap(), Some(12));
        assert_eq!(id(r#"{"id":""}"#).unwrap(), None);
        assert_eq!(id(r#"{"id":null}"#).unwrap(), None);
        assert_eq!(id(r#"{}"#).unwrap(), None);
    }

    #[test]
    fn non_numeric_string_is_an_error() {
        assert!(id(r#"{"id":"abc"}"#).is_err());
    }
}
