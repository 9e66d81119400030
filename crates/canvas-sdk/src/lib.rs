//! Shared SDK for the Canvas MCP server.
//!
//! Transport-free domain logic consumed by `canvas-mcp`.
//!
//! # Modules
//!
//! - [`courses`]: Course records and past/current/future term classification

pub mod courses;
