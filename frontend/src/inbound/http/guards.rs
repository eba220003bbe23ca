//! Authorization guard extractors.
//!
//! Handlers declare their access rule in the signature: extracting
//! [`Authenticated`], [`AdminOnly`], or [`MemberOnly`] runs the session
//! check before the handler body executes. A failed check responds on its
//! own, so handler bodies never re-check roles.

use actix_session::SessionExt;
use actix_web::{dev::Payload, FromRequest, HttpRequest, HttpResponse, ResponseError};
use std::future::{ready, Ready};
use thiserror::Error;
use url::form_urlencoded;

use crate::domain::{User, Viewer};
use crate::inbound::http::render;
use crate::inbound::http::session::{SessionContext, REDIRECT_KEY};

/// Why a guarded request was turned away.
#[derive(Debug, Error)]
pub enum GateDenial {
    /// No authenticated user; send them to the login page and bring them
    /// back afterwards.
    #[error("login required to reach {target}")]
    LoginRequired { target: String },
    /// Authenticated but the role does not permit this page.
    #[error("{message}")]
    Forbidden { message: &'static str },
}

impl ResponseError for GateDenial {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            Self::LoginRequired { .. } => actix_web::http::StatusCode::SEE_OTHER,
            Self::Forbidden { .. } => actix_web::http::StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::LoginRequired { target } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("redirectTo", target)
                    .append_pair("error", "unauthorized")
                    .finish();
                HttpResponse::SeeOther()
                    .insert_header((actix_web::http::header::LOCATION, format!("/login?{query}")))
                    .finish()
            }
            Self::Forbidden { message } => HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(render::error_page(403, message)),
        }
    }
}

fn requested_target(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned())
}

fn deny_with_login(req: &HttpRequest) -> GateDenial {
    let target = requested_target(req);
    // Stored in the session as well, so a subsequent login POST can honour
    // it even if the form drops the query parameter.
    let session = req.get_session();
    if let Err(error) = session.insert(REDIRECT_KEY, &target) {
        tracing::warn!(%error, "failed to store post-login redirect target");
    }
    GateDenial::LoginRequired { target }
}

fn viewer_of(req: &HttpRequest) -> Viewer {
    SessionContext::new(req.get_session()).viewer()
}

/// Any logged-in user.
#[derive(Debug, Clone)]
pub struct Authenticated(pub User);

impl FromRequest for Authenticated {
    type Error = GateDenial;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match viewer_of(req) {
            Viewer::Member(user) | Viewer::Admin(user) => Ok(Self(user)),
            Viewer::Anonymous => Err(deny_with_login(req)),
        };
        ready(result)
    }
}

/// Admins only. Anonymous users are sent to login; members get a 403.
#[derive(Debug, Clone)]
pub struct AdminOnly(pub User);

impl FromRequest for AdminOnly {
    type Error = GateDenial;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match viewer_of(req) {
            Viewer::Admin(user) => Ok(Self(user)),
            Viewer::Member(_) => Err(GateDenial::Forbidden {
                message: "You don't have permission to access this page.",
            }),
            Viewer::Anonymous => Err(deny_with_login(req)),
        };
        ready(result)
    }
}

/// Members only. Admins review applications; they do not submit them.
#[derive(Debug, Clone)]
pub struct MemberOnly(pub User);

impl FromRequest for MemberOnly {
    type Error = GateDenial;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match viewer_of(req) {
            Viewer::Member(user) => Ok(Self(user)),
            Viewer::Admin(_) => Err(GateDenial::Forbidden {
                message: "Administrators cannot apply for job positions.",
            }),
            Viewer::Anonymous => Err(deny_with_login(req)),
        };
        ready(result)
    }
}
