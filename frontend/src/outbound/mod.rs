//! Outbound adapters for the backend REST API.

pub mod api;
