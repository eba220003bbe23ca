//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::SameSite;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use crate::inbound::http::state::HttpState;
use crate::inbound::http::{applications, auth, home, jobs, uploads};
use crate::outbound::api::{
    ApiApplicationsGateway, ApiAuthGateway, ApiClient, ApiCvDownloads, ApiJobsGateway,
};
use crate::Trace;

/// Register every route.
///
/// Literal `/jobs` paths come before the `/jobs/{id}` detail route so that
/// `create` is never parsed as a job id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::home)
        .service(auth::show_login)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::show_register)
        .service(auth::register)
        .service(jobs::list_jobs)
        .service(jobs::show_create_job)
        .service(jobs::create_job)
        .service(jobs::show_edit_job)
        .service(jobs::update_job)
        .service(jobs::delete_job)
        .service(applications::show_apply_form)
        .service(applications::submit_application)
        .service(applications::application_submitted)
        .service(applications::list_applications)
        .service(applications::application_detail)
        .service(applications::accept_application)
        .service(applications::reject_application)
        .service(applications::my_applications)
        .service(applications::my_application_detail)
        .service(jobs::job_detail)
        .service(uploads::download_cv);
}

fn build_http_state(api: ApiClient) -> HttpState {
    HttpState {
        jobs: Arc::new(ApiJobsGateway::new(api.clone())),
        applications: Arc::new(ApiApplicationsGateway::new(api.clone())),
        auth: Arc::new(ApiAuthGateway::new(api.clone())),
        cvs: Arc::new(ApiCvDownloads::new(api)),
    }
}

/// Construct the HTTP server from a pre-built [`ServerConfig`].
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the backend client cannot be built or
/// binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        api_base_url,
        request_timeout,
    } = config;
    let api = ApiClient::new(api_base_url, request_timeout).map_err(|error| {
        std::io::Error::other(format!("building the backend API client failed: {error}"))
    })?;
    let state = web::Data::new(build_http_state(api));

    let server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(SameSite::Lax)
            .session_lifecycle(
                PersistentSession::default()
                    .session_ttl(actix_web::cookie::time::Duration::hours(24)),
            )
            .build();

        App::new()
            .app_data(state.clone())
            .wrap(session)
            .wrap(Trace)
            .configure(configure_routes)
    })
    .bind(bind_addr)?;

    Ok(server.run())
}
