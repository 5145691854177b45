use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Deserializes a field that may be absent, `null`, or a value.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` so that an
/// absent field stays `None` while an explicit `null` becomes `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

/// Deserializes an optional integer id sent either as a number or as a
/// numeric string, as form selects do. `null` and `""` both mean no id.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<IdValue>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(IdValue::Number(n)) => n,
        Some(IdValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text)))?
        }
    };

    i32::try_from(id)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("id out of range: {}", id)))
}

/// [`lenient_id`] for partial updates: absent stays `None`, while `null` or
/// `""` becomes `Some(None)`.
pub fn lenient_id_patch<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_id(deserializer).map(Some)
}

/// Serializes a missing one-to-one record as `{}` instead of `null`.
pub fn empty_object_if_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// Trims a required text field, treating blank input as missing.
pub fn required_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        department_id: Option<Option<i32>>,
    }

    #[derive(Debug, Deserialize)]
    struct Assignment {
        #[serde(default, deserialize_with = "lenient_id")]
        shift_id: Option<i32>,
        #[serde(default, deserialize_with = "lenient_id_patch")]
        department_id: Option<Option<i32>>,
    }

    #[derive(Serialize)]
    struct Profile {
        #[serde(serialize_with = "empty_object_if_none")]
        salary: Option<i32>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinguished() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.department_id, None);

        let null: Patch = serde_json::from_str(r#"{"department_id": null}"#).unwrap();
        assert_eq!(null.department_id, Some(None));

        let value: Patch = serde_json::from_str(r#"{"department_id": 3}"#).unwrap();
        assert_eq!(value.department_id, Some(Some(3)));
    }

    #[test]
    fn test_ids_accept_numbers_and_numeric_strings() {
        let parsed: Assignment =
            serde_json::from_str(r#"{"shift_id": "2", "department_id": 5}"#).unwrap();
        assert_eq!(parsed.shift_id, Some(2));
        assert_eq!(parsed.department_id, Some(Some(5)));

        let blank: Assignment =
            serde_json::from_str(r#"{"shift_id": "", "department_id": ""}"#).unwrap();
        assert_eq!(blank.shift_id, None);
        assert_eq!(blank.department_id, Some(None));

        let absent: Assignment = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.shift_id, None);
        assert_eq!(absent.department_id, None);
    }

    #[test]
    fn test_ids_reject_garbage_and_overflow() {
        assert!(serde_json::from_str::<Assignment>(r#"{"shift_id": "night"}"#).is_err());
        assert!(serde_json::from_str::<Assignment>(r#"{"shift_id": 9999999999}"#).is_err());
        assert!(serde_json::from_str::<Assignment>(r#"{"shift_id": true}"#).is_err());
    }

    #[test]
    fn test_missing_record_serializes_as_empty_object() {
        let json = serde_json::to_value(Profile { salary: None }).unwrap();
        assert_eq!(json, serde_json::json!({ "salary": {} }));
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert_eq!(required_text(Some("  Nurse ")), Some("Nurse"));
        assert_eq!(required_text(Some("   ")), None);
        assert_eq!(required_text(None), None);
    }
}
