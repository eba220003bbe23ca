//! Test helpers for inbound HTTP components.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App};

use crate::domain::ports::fixtures::FIXTURE_PASSWORD;
use crate::inbound::http::state::HttpState;

/// Session middleware configured for tests: fresh key per invocation,
/// cookie named `session`, `Secure` off for plain-HTTP test calls.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// An app with sessions, fixture state, and the auth routes, but no other
/// pages. Guard tests bolt their own routes onto this.
pub fn protected_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    protected_app_with(HttpState::fixture())
}

/// Like [`protected_app`] but with caller-provided state.
pub fn protected_app_with(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(test_session_middleware())
        .app_data(web::Data::new(state))
        .service(crate::inbound::http::auth::login)
        .service(crate::inbound::http::auth::logout)
}

/// An app serving the full route table against the given state.
pub fn portal_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(test_session_middleware())
        .app_data(web::Data::new(state))
        .configure(crate::server::configure_routes)
}

async fn login_as(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) -> actix_web::cookie::Cookie<'static> {
    let request = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", email), ("password", FIXTURE_PASSWORD)])
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(
        response.status(),
        actix_web::http::StatusCode::SEE_OTHER,
        "login should redirect"
    );
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Log in with the seeded admin account and return the session cookie.
pub async fn login_as_admin(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    login_as(app, "admin@example.com").await
}

/// Log in with the seeded member account and return the session cookie.
pub async fn login_as_member(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    login_as(app, "member@example.com").await
}
