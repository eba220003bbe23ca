//! Ports describing what the portal needs from the backend REST API.
//!
//! Each trait exposes a strongly typed error so adapters map transport and
//! status failures into predictable variants. The [`fixtures`] module
//! provides in-memory implementations used by the handler tests and the
//! standalone demo server.

pub mod fixtures;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::application::{Application, NewApplication, ReviewDecision};
use crate::domain::auth::{Credentials, Registration};
use crate::domain::job::{Job, JobDraft};
use crate::domain::user::User;

/// Failures surfaced by the backend API adapters.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend reported that the resource does not exist.
    #[error("resource not found")]
    NotFound,
    /// The backend rejected the request as conflicting with existing state.
    #[error("conflicting state")]
    Conflict,
    /// The backend rejected the caller's credentials.
    #[error("unauthorized")]
    Unauthorized,
    /// The response body could not be decoded.
    #[error("response decode failed: {message}")]
    Decode { message: String },
    /// The backend could not be reached.
    #[error("transport failure: {message}")]
    Transport { message: String },
    /// The request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },
    /// The backend answered with an unexpected status.
    #[error("backend returned status {status}")]
    Backend { status: u16 },
}

/// Result alias used throughout the gateway traits.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<GatewayError> for crate::domain::Error {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::NotFound => Self::not_found("The requested resource was not found."),
            GatewayError::Conflict => Self::conflict("The request conflicts with existing state."),
            GatewayError::Unauthorized => Self::unauthorized("Authentication is required."),
            GatewayError::Decode { message } => {
                Self::internal(format!("backend response decode failed: {message}"))
            }
            GatewayError::Transport { message } | GatewayError::Timeout { message } => {
                Self::unavailable(format!("backend unreachable: {message}"))
            }
            GatewayError::Backend { status } => {
                Self::internal(format!("backend returned status {status}"))
            }
        }
    }
}

/// Filters and paging for a job listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub capability: Option<String>,
    pub band: Option<String>,
}

/// One page of jobs plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: u32,
}

/// Read and write access to job postings.
#[async_trait]
pub trait JobsGateway: Send + Sync {
    /// List jobs matching the query, paged.
    async fn list(&self, query: &JobQuery) -> GatewayResult<JobPage>;

    /// Every job, unfiltered. Used to build the filter dropdowns.
    async fn all(&self) -> GatewayResult<Vec<Job>>;

    /// Fetch one job by id.
    async fn get(&self, id: i64) -> GatewayResult<Job>;

    /// Create a job, returning its assigned id.
    async fn create(&self, draft: &JobDraft) -> GatewayResult<i64>;

    /// Replace a job's fields.
    async fn update(&self, id: i64, draft: &JobDraft) -> GatewayResult<()>;

    /// Delete a job.
    async fn delete(&self, id: i64) -> GatewayResult<()>;
}

/// Read and write access to applications.
#[async_trait]
pub trait ApplicationsGateway: Send + Sync {
    /// Fetch one application by id.
    async fn get(&self, id: i64) -> GatewayResult<Application>;

    /// All applications submitted against a job.
    async fn for_job(&self, job_id: i64) -> GatewayResult<Vec<Application>>;

    /// All applications submitted by a user.
    async fn for_user(&self, user_id: i64) -> GatewayResult<Vec<Application>>;

    /// A user's application to one job, if any.
    async fn for_user_and_job(
        &self,
        user_id: i64,
        job_id: i64,
    ) -> GatewayResult<Option<Application>>;

    /// Submit a new application, returning its assigned id.
    async fn submit(&self, application: &NewApplication) -> GatewayResult<i64>;

    /// Record a review decision with the reviewer's notes.
    async fn review(&self, id: i64, decision: ReviewDecision, notes: &str) -> GatewayResult<()>;
}

/// Authentication calls delegated to the backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for the authenticated user.
    async fn login(&self, credentials: &Credentials) -> GatewayResult<User>;

    /// Create an account.
    async fn register(&self, registration: &Registration) -> GatewayResult<()>;

    /// Invalidate the backend session, if the backend keeps one.
    async fn logout(&self) -> GatewayResult<()>;
}

/// A CV file streamed back from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub content_type: String,
    pub content_disposition: Option<String>,
    pub bytes: Vec<u8>,
}

/// Proxy access to uploaded CV files.
#[async_trait]
pub trait CvDownloads: Send + Sync {
    /// Fetch a CV by its upload path components.
    async fn fetch(&self, year: &str, month: &str, filename: &str) -> GatewayResult<CvFile>;
}
