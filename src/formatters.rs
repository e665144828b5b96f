use crate::constants::{
    ALERTS_UNAVAILABLE, BLOCK_SEPARATOR, FORECAST_UNAVAILABLE, MAX_FORECAST_PERIODS,
    NO_ACTIVE_ALERTS, NO_INSTRUCTIONS, UNKNOWN,
};
use crate::models::{AlertRecord, ForecastPeriod};
use crate::upstream::UpstreamResponse;

/// Formats active alerts into a human-readable string
pub fn format_alerts(payload: &UpstreamResponse) -> String {
    let Some(alerts) = AlertRecord::from_payload(payload) else {
        return ALERTS_UNAVAILABLE.to_string();
    };

    if alerts.is_empty() {
        return NO_ACTIVE_ALERTS.to_string();
    }

    alerts
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn format_alert(alert: &AlertRecord) -> String {
    let severity = alert.severity.as_deref().unwrap_or(UNKNOWN);

    // The event line carries the severity level.
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        severity,
        alert.area.as_deref().unwrap_or(UNKNOWN),
        severity,
        alert.description.as_deref().unwrap_or(UNKNOWN),
        alert.instructions.as_deref().unwrap_or(NO_INSTRUCTIONS),
    )
}

/// Formats the leading forecast periods into a human-readable string
pub fn format_forecast(payload: &UpstreamResponse) -> String {
    let periods = match ForecastPeriod::from_payload(payload) {
        Some(periods) if !periods.is_empty() => periods,
        _ => return FORECAST_UNAVAILABLE.to_string(),
    };

    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn format_period(period: &ForecastPeriod) -> String {
    let temperature = match &period.temperature {
        Some(value) => format!(
            "{}\u{00b0}{}",
            value,
            period.temperature_unit.as_deref().unwrap_or_default()
        ),
        None => UNKNOWN.to_string(),
    };

    format!(
        "{}:\nTemperature: {}\nWind: {} {}\nForecast: {}",
        period.name.as_deref().unwrap_or(UNKNOWN),
        temperature,
        period.wind_speed.as_deref().unwrap_or(UNKNOWN),
        period.wind_direction.as_deref().unwrap_or(UNKNOWN),
        period.detailed_forecast.as_deref().unwrap_or(UNKNOWN),
    )
}
