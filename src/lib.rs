//! MCP server exposing National Weather Service alerts and forecasts as tools.
//!
//! Each tool call is independent: it fetches from the NWS API through an
//! [`upstream::Upstream`], renders the decoded document as text, and returns
//! that text to the client. Upstream failures are reported as text, never as
//! protocol errors.

pub mod config;
pub mod constants;
pub mod formatters;
pub mod models;
pub mod service;
pub mod upstream;

pub use config::{Cli, Config};
pub use service::Weather;
pub use upstream::{FetchError, NwsClient, Upstream, UpstreamResponse};
