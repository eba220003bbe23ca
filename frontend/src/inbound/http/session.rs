//! Session helpers keeping handlers free of framework-specific logic.
//!
//! A thin wrapper around the Actix session so handlers deal in domain
//! operations: resolve the viewer, record a login, remember where to send
//! the user after they authenticate.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, User, Viewer};

pub(crate) const USER_KEY: &str = "user";
pub(crate) const AUTHENTICATED_KEY: &str = "is_authenticated";
pub(crate) const REDIRECT_KEY: &str = "redirect_to";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Resolve the viewer for this request.
    ///
    /// A cookie that fails to deserialise is treated as anonymous rather
    /// than an error: a stale or tampered cookie must never take the whole
    /// page down. A user entry without the authenticated flag (or the flag
    /// without a user) is likewise anonymous.
    pub fn viewer(&self) -> Viewer {
        let user = match self.0.get::<User>(USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "unreadable user entry in session cookie");
                return Viewer::Anonymous;
            }
        };
        let authenticated = self
            .0
            .get::<bool>(AUTHENTICATED_KEY)
            .ok()
            .flatten()
            .unwrap_or(false);
        match (user, authenticated) {
            (Some(user), true) => Viewer::from_user(Some(user)),
            (Some(_), false) => {
                tracing::warn!("session has a user entry without the authenticated flag");
                Viewer::Anonymous
            }
            (None, true) => {
                tracing::warn!("session is flagged authenticated but has no user entry");
                Viewer::Anonymous
            }
            (None, false) => Viewer::Anonymous,
        }
    }

    /// Record a successful login.
    pub fn log_in(&self, user: &User) -> Result<(), Error> {
        self.0
            .insert(USER_KEY, user)
            .and_then(|()| self.0.insert(AUTHENTICATED_KEY, true))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Remember where to send the user once they log in.
    pub fn remember_target(&self, target: &str) -> Result<(), Error> {
        self.0
            .insert(REDIRECT_KEY, target)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Take the stored post-login target, clearing it.
    pub fn take_redirect_target(&self) -> Option<String> {
        let target = self.0.get::<String>(REDIRECT_KEY).ok().flatten();
        if target.is_some() {
            self.0.remove(REDIRECT_KEY);
        }
        target
    }

    /// Destroy the session entirely.
    pub fn log_out(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
