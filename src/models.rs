use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// National Weather Service API Models
// ============================================================================
//
// Upstream fields are decoded leniently: a missing, null or mistyped field
// becomes `None` instead of rejecting the whole document.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlertRecord {
    #[serde(rename = "areaDesc", deserialize_with = "lenient_string")]
    pub area: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub severity: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(rename = "instruction", deserialize_with = "lenient_string")]
    pub instructions: Option<String>,
}

impl AlertRecord {
    /// Decodes `features[].properties` in input order.
    ///
    /// Returns `None` when the payload has no `features` array at all.
    pub fn from_payload(payload: &Value) -> Option<Vec<AlertRecord>> {
        let features = payload.get("features")?.as_array()?;
        Some(
            features
                .iter()
                .map(|feature| {
                    feature
                        .get("properties")
                        .and_then(|props| AlertRecord::deserialize(props).ok())
                        .unwrap_or_default()
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastPeriod {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub temperature: Option<Number>,
    #[serde(rename = "temperatureUnit", deserialize_with = "lenient_string")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed", deserialize_with = "lenient_string")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection", deserialize_with = "lenient_string")]
    pub wind_direction: Option<String>,
    #[serde(rename = "detailedForecast", deserialize_with = "lenient_string")]
    pub detailed_forecast: Option<String>,
}

impl ForecastPeriod {
    /// Decodes `properties.periods[]` in upstream (chronological) order.
    ///
    /// Returns `None` when the payload carries no periods array.
    pub fn from_payload(payload: &Value) -> Option<Vec<ForecastPeriod>> {
        let periods = payload.pointer("/properties/periods")?.as_array()?;
        Some(
            periods
                .iter()
                .map(|period| ForecastPeriod::deserialize(period).unwrap_or_default())
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Forecast URL resolved for this grid point
    pub forecast: String,
    #[serde(rename = "gridId", default, deserialize_with = "lenient_string")]
    pub grid_id: Option<String>,
    #[serde(rename = "gridX", default, deserialize_with = "lenient_number")]
    pub grid_x: Option<Number>,
    #[serde(rename = "gridY", default, deserialize_with = "lenient_number")]
    pub grid_y: Option<Number>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n),
        _ => None,
    })
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state or territory code (e.g. CA, NY)
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alert_fields_map_from_nws_names() {
        let payload = json!({
            "features": [{
                "properties": {
                    "event": "Flood Watch",
                    "areaDesc": "Travis",
                    "severity": "Moderate",
                    "description": "Flood watch",
                    "instruction": "Move to higher ground"
                }
            }]
        });

        let records = AlertRecord::from_payload(&payload).unwrap();
        assert_eq!(
            records,
            vec![AlertRecord {
                area: Some("Travis".into()),
                severity: Some("Moderate".into()),
                description: Some("Flood watch".into()),
                instructions: Some("Move to higher ground".into()),
            }]
        );
    }

    #[test]
    fn mistyped_alert_fields_decode_as_none() {
        let payload = json!({
            "features": [
                { "properties": { "areaDesc": 42, "severity": null, "description": "ok" } },
                { "properties": "not an object" },
                { "id": "no properties" }
            ]
        });

        let records = AlertRecord::from_payload(&payload).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].area, None);
        assert_eq!(records[0].severity, None);
        assert_eq!(records[0].description.as_deref(), Some("ok"));
        assert_eq!(records[1], AlertRecord::default());
        assert_eq!(records[2], AlertRecord::default());
    }

    #[test]
    fn missing_features_is_distinct_from_empty() {
        assert_eq!(AlertRecord::from_payload(&json!({})), None);
        assert_eq!(AlertRecord::from_payload(&json!({ "features": {} })), None);
        assert_eq!(AlertRecord::from_payload(&json!({ "features": [] })), Some(vec![]));
    }

    #[test]
    fn forecast_temperature_keeps_upstream_number() {
        let payload = json!({
            "properties": {
                "periods": [
                    { "name": "Tonight", "temperature": 54, "temperatureUnit": "F" },
                    { "name": "Monday", "temperature": 12.5, "temperatureUnit": "C" },
                    { "name": "Later", "temperature": "warm" }
                ]
            }
        });

        let periods = ForecastPeriod::from_payload(&payload).unwrap();
        assert_eq!(periods[0].temperature.as_ref().map(ToString::to_string), Some("54".into()));
        assert_eq!(periods[1].temperature.as_ref().map(ToString::to_string), Some("12.5".into()));
        assert_eq!(periods[2].temperature, None);
        assert_eq!(periods[2].name.as_deref(), Some("Later"));
    }

    #[test]
    fn points_response_exposes_forecast_url() {
        let payload = json!({
            "properties": {
                "forecast": "https://api.weather.gov/gridpoints/MTR/85,105/forecast",
                "gridId": "MTR",
                "gridX": 85,
                "gridY": 105
            }
        });

        let points: PointsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(
            points.properties.forecast,
            "https://api.weather.gov/gridpoints/MTR/85,105/forecast"
        );
        assert_eq!(points.properties.grid_id.as_deref(), Some("MTR"));
    }

    #[test]
    fn mistyped_grid_coordinates_keep_forecast_url() {
        let payload = json!({
            "properties": {
                "forecast": "https://api.weather.gov/gridpoints/MTR/85,105/forecast",
                "gridId": 7,
                "gridX": "85",
                "gridY": null
            }
        });

        let points: PointsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(
            points.properties.forecast,
            "https://api.weather.gov/gridpoints/MTR/85,105/forecast"
        );
        assert_eq!(points.properties.grid_id, None);
        assert_eq!(points.properties.grid_x, None);
        assert_eq!(points.properties.grid_y, None);
    }

    #[test]
    fn points_response_without_forecast_url_is_rejected() {
        let payload = json!({ "properties": { "gridId": "MTR" } });
        assert!(serde_json::from_value::<PointsResponse>(payload).is_err());
    }
}
