//! # Canvas Client
//!
//! Thin, read-only client for the Canvas LMS REST API.
//!
//! - [`CanvasConfig`]: base URL and bearer token, resolved once at startup
//! - [`CanvasApi`] / [`CanvasClient`]: single authenticated GET per call
//! - [`ApiRequest`]: path segments and query pairs relative to `/api/v1`
//! - [`ClientError`]: configuration, transport and upstream failures

pub mod client;
pub mod config;
pub mod error;
pub mod request;

pub use client::{CanvasApi, CanvasClient};
pub use config::{CanvasConfig, ACCESS_TOKEN_ENV, BASE_URL_ENV};
pub use error::{ClientError, ClientResult};
pub use request::ApiRequest;
