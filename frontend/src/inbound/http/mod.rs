//! HTTP inbound adapter serving the portal's pages and form posts.

pub mod applications;
pub mod auth;
pub mod error;
pub mod guards;
pub mod home;
pub mod jobs;
pub mod render;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod uploads;
pub mod views;

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::domain::Error;

/// `303 See Other` redirect; the canonical answer to a handled form post.
pub fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref().to_owned()))
        .finish()
}

/// A rendered HTML page.
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Parse a path segment as a numeric id.
///
/// Ids arrive as raw strings so a malformed value can redirect with a
/// symbolic code instead of falling through to the framework's 404.
pub fn parse_id(raw: &str) -> Result<i64, Error> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::invalid_request(format!("invalid id: {raw}")))
}
