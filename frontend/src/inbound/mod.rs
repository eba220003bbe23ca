//! Inbound adapters translating external requests into domain calls while
//! keeping framework details at the edge.
//!
//! The portal is server-rendered, so the only inbound transport is HTTP.

pub mod http;
