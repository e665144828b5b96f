/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("nws-weather-mcp/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type requested from the NWS API
pub const GEO_JSON: &str = "application/geo+json";

/// Per-request timeout applied by the upstream client
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of forecast periods rendered (today plus the next few)
pub const MAX_FORECAST_PERIODS: usize = 5;

/// Separator between rendered alert or forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const UNKNOWN: &str = "Unknown";
pub const NO_INSTRUCTIONS: &str = "No specific instructions provided";

pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";
pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const LOCATION_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
pub const LOCATION_NOT_COVERED: &str =
    "Location not found in NWS coverage area. This location may be outside the grid system.";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";

pub const API_STATUS_OK: &str = "NWS API is working correctly.";
pub const API_STATUS_UNEXPECTED: &str = "NWS API responded but did not report an OK status.";
pub const API_STATUS_UNREACHABLE: &str =
    "NWS API is not responding. Check your internet connection.";
