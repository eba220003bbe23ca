//! Server-rendered job-portal front-end.
//!
//! The crate accepts browser requests, calls a separate backend REST API for
//! job, application, and user data, and renders HTML pages. The interesting
//! logic lives in [`domain`]: the authorization gate, the job and application
//! lifecycle rules, and the symbolic error/success code mapper. Everything
//! else is adapter plumbing:
//!
//! - [`inbound::http`] — actix-web handlers, session wrapper, guard
//!   extractors, and the minimal HTML view layer.
//! - [`outbound::api`] — reqwest client for the backend API, including the
//!   response-shape normalizing DTOs.
//! - [`server`] — server construction and route wiring.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::trace::Trace;
