//! Login, logout, and registration handlers.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use crate::domain::auth::{Credentials, Registration};
use crate::domain::notice::{ErrorNotice, SuccessNotice};
use crate::domain::ports::GatewayError;
use crate::domain::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::header_state;
use crate::inbound::http::{html, render, see_other};

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    error: Option<String>,
    success: Option<String>,
    #[serde(rename = "redirectTo")]
    redirect_to: Option<String>,
}

/// Only same-site paths are honoured as post-login targets.
fn safe_target(raw: &str) -> Option<&str> {
    (raw.starts_with('/') && !raw.starts_with("//")).then_some(raw)
}

#[get("/login")]
pub async fn show_login(
    session: SessionContext,
    query: web::Query<LoginQuery>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer();
    if viewer.is_authenticated() {
        return Ok(see_other("/"));
    }
    let redirect_to = query
        .redirect_to
        .as_deref()
        .and_then(safe_target);
    if let Some(target) = redirect_to {
        session.remember_target(target)?;
    }
    Ok(html(render::login_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        &SuccessNotice::from_code(query.success.as_deref()),
        redirect_to,
    )))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(rename = "redirectTo")]
    redirect_to: Option<String>,
}

#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let Ok(credentials) = Credentials::try_new(&form.email, &form.password) else {
        return Ok(see_other("/login?error=missing-fields"));
    };
    match state.auth.login(&credentials).await {
        Ok(user) => {
            session.log_in(&user)?;
            // A target stored by a guard outranks the form's hidden field.
            let target = session
                .take_redirect_target()
                .or_else(|| {
                    form.redirect_to
                        .as_deref()
                        .and_then(safe_target)
                        .map(ToOwned::to_owned)
                })
                .unwrap_or_else(|| "/?success=login".to_owned());
            Ok(see_other(target))
        }
        Err(GatewayError::Unauthorized) => Ok(see_other("/login?error=invalid-credentials")),
        Err(error) => {
            warn!(%error, "login call to backend failed");
            Ok(see_other("/login?error=login-failed"))
        }
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    match state.auth.logout().await {
        Ok(()) => {
            session.log_out();
            see_other("/login?success=logout")
        }
        Err(error) => {
            warn!(%error, "logout call to backend failed");
            see_other("/")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    error: Option<String>,
}

#[get("/register")]
pub async fn show_register(
    session: SessionContext,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let viewer = session.viewer();
    if viewer.is_authenticated() {
        return see_other("/");
    }
    html(render::register_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
    ))
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(rename = "displayName", default)]
    display_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(rename = "confirmPassword", default)]
    confirm_password: String,
}

#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> HttpResponse {
    let registration = match Registration::try_new(
        &form.display_name,
        &form.email,
        &form.password,
        &form.confirm_password,
    ) {
        Ok(registration) => registration,
        Err(error) => {
            return see_other(format!("/register?error={}", error.redirect_code()));
        }
    };
    match state.auth.register(&registration).await {
        Ok(()) => see_other("/login?success=registration"),
        Err(error) => {
            warn!(%error, "registration call to backend failed");
            see_other("/register?error=registration-failed")
        }
    }
}
