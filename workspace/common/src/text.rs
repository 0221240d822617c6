use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error};
use validator::ValidationError;

/// Rejects text that is empty once surrounding whitespace is removed.
///
/// The field's message comes from the `message` given at the use site.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Reads an optional `YYYY-MM-DD` date where a blank string means no date.
///
/// HTML date inputs submit `""` when left empty.
pub fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", raw, e))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "blank_date_as_none")]
        on: Option<NaiveDate>,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Developer").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t ").is_err());
    }

    #[test]
    fn test_blank_and_missing_dates_are_none() {
        for body in [r#"{}"#, r#"{"on":null}"#, r#"{"on":""}"#, r#"{"on":"  "}"#] {
            let dated: Dated = serde_json::from_str(body).unwrap();
            assert_eq!(dated.on, None, "{}", body);
        }
    }

    #[test]
    fn test_dates_are_parsed() {
        let dated: Dated = serde_json::from_str(r#"{"on":"2021-06-01"}"#).unwrap();
        assert_eq!(dated.on, NaiveDate::from_ymd_opt(2021, 6, 1));

        assert!(serde_json::from_str::<Dated>(r#"{"on":"June 2021"}"#).is_err());
    }
}
