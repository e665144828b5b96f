//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nws_weather_mcp::{FetchError, Upstream, UpstreamResponse, Weather};
use serde_json::{json, Value};

pub const API_BASE: &str = "https://nws.test";

/// Upstream that answers from a fixed URL table and records every request.
///
/// URLs with no scripted answer get a 404.
#[derive(Default)]
pub struct ScriptedUpstream {
    responses: Mutex<HashMap<String, Result<UpstreamResponse, FetchError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, response: Result<Value, FetchError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Upstream for ScriptedUpstream {
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status { code: 404 }))
    }
}

pub fn weather(upstream: &Arc<ScriptedUpstream>) -> Weather {
    Weather::with_upstream(upstream.clone(), API_BASE)
}

pub fn alerts_url(state: &str) -> String {
    format!("{API_BASE}/alerts/active/area/{state}")
}

pub fn points_url(latitude: f64, longitude: f64) -> String {
    format!("{API_BASE}/points/{latitude},{longitude}")
}

pub fn points_payload(forecast_url: &str) -> Value {
    json!({
        "properties": {
            "forecast": forecast_url,
            "gridId": "MTR",
            "gridX": 85,
            "gridY": 105
        }
    })
}

pub fn forecast_payload(count: usize) -> Value {
    let periods: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "number": i + 1,
                "name": format!("Period {}", i + 1),
                "temperature": 60 + i,
                "temperatureUnit": "F",
                "windSpeed": "5 to 10 mph",
                "windDirection": "W",
                "detailedForecast": format!("Details for period {}", i + 1)
            })
        })
        .collect();
    json!({ "properties": { "periods": periods } })
}
