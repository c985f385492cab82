// Validation helpers shared by the request DTOs.

use serde::{Deserialize, Deserializer};

/// Trim an optional string field, collapsing empty submissions to None.
/// HTML forms send absent optional inputs as empty strings, so "" and a
/// missing key mean the same thing at the create boundary.
pub fn trim_optional_field(field: Option<&String>) -> Option<String> {
    field.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Deserializer for double-Option update fields.
///
/// Distinguishes an absent key (outer None, leave the column unchanged) from
/// an explicit null (inner None, clear the column). Pair with
/// `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        followup_date: Option<Option<NaiveDate>>,
    }

    #[test]
    fn trim_optional_field_collapses_empty() {
        assert_eq!(trim_optional_field(None), None);
        assert_eq!(trim_optional_field(Some(&"  ".to_string())), None);
        assert_eq!(
            trim_optional_field(Some(&" Acme ".to_string())),
            Some("Acme".to_string())
        );
    }

    #[test]
    fn double_option_distinguishes_absent_from_null() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.followup_date, None);

        let cleared: Payload = serde_json::from_str(r#"{"followup_date": null}"#).unwrap();
        assert_eq!(cleared.followup_date, Some(None));

        let set: Payload = serde_json::from_str(r#"{"followup_date": "2024-03-01"}"#).unwrap();
        assert_eq!(
            set.followup_date,
            Some(Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
        );
    }
}
