// Hourly forecast records and their JSON decoding
use crate::domain::error::ForecastError;
use serde::Deserialize;

/// One hour of forecast data: a time label and a temperature in °C.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourRecord {
    pub time: String,
    #[serde(rename = "temp_c")]
    pub temperature: f64,
}

/// Decode a JSON array of hourly records, preserving input order.
///
/// The payload must be an array of objects each carrying a string `time`
/// and a numeric `temp_c`; extra fields are ignored, anything else is
/// rejected as malformed input. An empty array is valid and yields an
/// empty vector.
pub fn parse_hours(json: &str) -> Result<Vec<HourRecord>, ForecastError> {
    Ok(serde_json::from_str::<Vec<HourRecord>>(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order_and_fields() {
        let json = r#"[{"time":"00:00","temp_c":5.0},{"time":"01:00","temp_c":4.5}]"#;
        let records = parse_hours(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, "00:00");
        assert_eq!(records[0].temperature, 5.0);
        assert_eq!(records[1].time, "01:00");
        assert_eq!(records[1].temperature, 4.5);
    }

    #[test]
    fn test_parse_empty_array() {
        let records = parse_hours("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let json = r#"[{"time":"00:00","temp_c":5.0,"wind_kph":12.3,"condition":{"text":"Sunny"}}]"#;
        let records = parse_hours(json).unwrap();
        assert_eq!(records[0].temperature, 5.0);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_hours("{}");
        assert!(matches!(result, Err(ForecastError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_rejects_missing_temperature() {
        let result = parse_hours(r#"[{"time":"00:00"}]"#);
        assert!(matches!(result, Err(ForecastError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_field_type() {
        let result = parse_hours(r#"[{"time":"00:00","temp_c":"warm"}]"#);
        assert!(matches!(result, Err(ForecastError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let json = r#"[{"time":"00:00","temp_c":5.0},{"time":"01:00","temp_c":4.5}]"#;
        assert_eq!(parse_hours(json).unwrap(), parse_hours(json).unwrap());
    }
}
