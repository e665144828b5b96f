use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::config::Config;
use crate::constants::{
    ALERTS_UNAVAILABLE, API_STATUS_OK, API_STATUS_UNEXPECTED, API_STATUS_UNREACHABLE,
    FORECAST_UNAVAILABLE, LOCATION_NOT_COVERED, LOCATION_UNAVAILABLE,
};
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{GetAlertsRequest, GetForecastRequest, PointsResponse};
use crate::upstream::{FetchError, NwsClient, Upstream};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    upstream: Arc<dyn Upstream>,
    api_base: Arc<str>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service backed by the live NWS API
    pub fn new(config: &Config) -> Result<Self> {
        let client = NwsClient::new(config)?;
        Ok(Self::with_upstream(Arc::new(client), &config.api_base))
    }

    /// Creates a service over any upstream source
    pub fn with_upstream(upstream: Arc<dyn Upstream>, api_base: &str) -> Self {
        Self {
            upstream,
            api_base: Arc::from(api_base.trim_end_matches('/')),
            tool_router: Self::tool_router(),
        }
    }

    /// Active alerts for a state, rendered as text
    pub async fn alerts(&self, state: &str) -> String {
        let Some(state) = normalize_state(state) else {
            tracing::warn!("Rejected state code: {:?}", state);
            return format!(
                "Invalid state code '{}'. Provide a two-letter US state or territory code (e.g. CA, NY).",
                state.trim()
            );
        };

        let url = format!("{}/alerts/active/area/{}", self.api_base, state);

        match self.upstream.fetch(&url).await {
            Ok(payload) => format_alerts(&payload),
            Err(e) => {
                tracing::warn!("Failed to fetch alerts for {}: {}", state, e);
                ALERTS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Short-term forecast for a coordinate, rendered as text
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> String {
        let forecast_url = match self.resolve_forecast_url(latitude, longitude).await {
            Ok(url) => url,
            Err(FetchError::Status { code: 404 }) => {
                tracing::warn!("No grid point for {}, {}", latitude, longitude);
                return LOCATION_NOT_COVERED.to_string();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve grid point for {}, {}: {}",
                    latitude,
                    longitude,
                    e
                );
                return LOCATION_UNAVAILABLE.to_string();
            }
        };

        match self.upstream.fetch(&forecast_url).await {
            Ok(payload) => format_forecast(&payload),
            Err(e) => {
                tracing::warn!("Failed to fetch forecast from {}: {}", forecast_url, e);
                FORECAST_UNAVAILABLE.to_string()
            }
        }
    }

    /// Reachability of the upstream API, rendered as text
    pub async fn api_status(&self) -> String {
        let url = format!("{}/", self.api_base);

        match self.upstream.fetch(&url).await {
            Ok(payload) if payload.get("status").and_then(|s| s.as_str()) == Some("OK") => {
                API_STATUS_OK.to_string()
            }
            Ok(payload) => {
                tracing::warn!("Unexpected API status document: {}", payload);
                API_STATUS_UNEXPECTED.to_string()
            }
            Err(e) => {
                tracing::warn!("API status check failed: {}", e);
                format!("{} ({})", API_STATUS_UNREACHABLE, e)
            }
        }
    }

    /// Looks up the grid point for a coordinate and returns its forecast URL
    async fn resolve_forecast_url(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, FetchError> {
        let points_url = format!("{}/points/{},{}", self.api_base, latitude, longitude);
        let payload = self.upstream.fetch(&points_url).await?;

        let points: PointsResponse =
            serde_json::from_value(payload).map_err(|e| FetchError::Decode(e.to_string()))?;
        let props = points.properties;

        tracing::debug!(
            "Resolved grid point {}/{:?},{:?}",
            props.grid_id.as_deref().unwrap_or("?"),
            props.grid_x,
            props.grid_y
        );

        Ok(props.forecast)
    }
}

/// Upper-cased two-letter code, or `None` if the input is not one
fn normalize_state(state: &str) -> Option<String> {
    let code = state.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides active alerts for US states, short-term forecasts for US locations, \
                and an API reachability check."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.alerts(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a US location
    #[tool(description = "Get the weather forecast for a US location. Provide latitude and longitude (e.g., latitude: 38.5816, longitude: -121.4944 for Sacramento).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast(request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Checks that the NWS API is reachable
    #[tool(description = "Check whether the National Weather Service API is reachable and reporting an OK status.")]
    async fn get_api_status(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Checking NWS API status");

        let text = self.api_status().await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
