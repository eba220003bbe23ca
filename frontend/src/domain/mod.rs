//! Domain entities and decision logic.
//!
//! Everything in this module is pure: lifecycle rules, the authorization
//! vocabulary ([`Viewer`]), and the notice mapper take values in and return
//! values out. Inbound adapters translate the results into redirects and
//! HTML; outbound adapters produce the entities from backend payloads.

pub mod application;
pub mod auth;
pub mod error;
pub mod job;
pub mod notice;
pub mod options;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{Role, User, UserValidationError, Viewer};

/// Convenient result alias for fallible domain and handler code.
pub type ApiResult<T> = Result<T, Error>;
