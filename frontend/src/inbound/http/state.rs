//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the gateway traits and stay testable against fixtures.

use std::sync::Arc;

use crate::domain::ports::fixtures::{
    FixtureApplicationsGateway, FixtureAuthGateway, FixtureCvDownloads, FixtureJobsGateway,
};
use crate::domain::ports::{ApplicationsGateway, AuthGateway, CvDownloads, JobsGateway};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub jobs: Arc<dyn JobsGateway>,
    pub applications: Arc<dyn ApplicationsGateway>,
    pub auth: Arc<dyn AuthGateway>,
    pub cvs: Arc<dyn CvDownloads>,
}

impl HttpState {
    /// State backed entirely by in-memory fixtures, used by the demo server
    /// and as a base for handler tests.
    pub fn fixture() -> Self {
        Self {
            jobs: Arc::new(FixtureJobsGateway::default()),
            applications: Arc::new(FixtureApplicationsGateway::default()),
            auth: Arc::new(FixtureAuthGateway::with_default_accounts()),
            cvs: Arc::new(FixtureCvDownloads::default()),
        }
    }
}
