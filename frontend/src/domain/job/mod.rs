//! Job entity and form validation.

pub mod rules;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a job is accepting interest at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    /// Loose parse used at the API boundary; anything the backend reports
    /// that is not `open` renders as closed.
    pub fn from_backend(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("open") {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posted role, fetched from the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capability: String,
    pub band: String,
    pub closing_date: NaiveDate,
    pub summary: String,
    pub key_responsibilities: String,
    pub status: JobStatus,
    pub open_positions: u32,
}

impl Job {
    /// A job accepts applications only while open with positions remaining.
    pub fn accepts_applications(&self) -> bool {
        self.status == JobStatus::Open && self.open_positions > 0
    }
}

/// Validated payload for creating or updating a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub name: String,
    pub location: String,
    pub capability: String,
    pub band: String,
    pub closing_date: NaiveDate,
    pub summary: String,
    pub key_responsibilities: String,
    pub status: JobStatus,
    pub open_positions: u32,
}

/// Raw form fields as submitted by the create/edit pages.
#[derive(Debug, Clone, Default)]
pub struct JobDraftInput {
    pub name: String,
    pub location: String,
    pub capability: String,
    pub band: String,
    pub closing_date: String,
    pub summary: String,
    pub key_responsibilities: String,
    pub status: String,
    pub open_positions: String,
}

/// Why a submitted job form was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDraftError {
    /// A required field was blank.
    MissingField(&'static str),
    /// The positions count was not a positive integer.
    InvalidPositions,
    /// The closing date did not parse as `YYYY-MM-DD`.
    InvalidClosingDate,
    /// The closing date is not in the future.
    ClosingDateNotFuture,
}

impl fmt::Display for JobDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "{name} is required"),
            Self::InvalidPositions => {
                write!(f, "number of open positions must be a positive integer")
            }
            Self::InvalidClosingDate => write!(f, "closing date must be YYYY-MM-DD"),
            Self::ClosingDateNotFuture => write!(f, "closing date must be in the future"),
        }
    }
}

impl std::error::Error for JobDraftError {}

impl JobDraftError {
    /// Symbolic code carried on the redirect back to the form.
    pub fn redirect_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing-fields",
            _ => "validation-failed",
        }
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, JobDraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(JobDraftError::MissingField(name))
    } else {
        Ok(trimmed)
    }
}

impl JobDraft {
    /// Validate raw form input into a draft.
    ///
    /// `today` is the caller's clock so that the future-date check stays
    /// deterministic under test.
    pub fn try_new(input: &JobDraftInput, today: NaiveDate) -> Result<Self, JobDraftError> {
        let name = required(&input.name, "name")?;
        let location = required(&input.location, "location")?;
        let capability = required(&input.capability, "capability")?;
        let band = required(&input.band, "band")?;
        let summary = required(&input.summary, "summary")?;
        let key_responsibilities = required(&input.key_responsibilities, "key responsibilities")?;
        let raw_positions = required(&input.open_positions, "number of open positions")?;
        let raw_closing = required(&input.closing_date, "closing date")?;

        let open_positions: u32 = raw_positions
            .parse()
            .map_err(|_| JobDraftError::InvalidPositions)?;
        if open_positions < 1 {
            return Err(JobDraftError::InvalidPositions);
        }

        let closing_date = NaiveDate::parse_from_str(raw_closing, "%Y-%m-%d")
            .map_err(|_| JobDraftError::InvalidClosingDate)?;
        if closing_date <= today {
            return Err(JobDraftError::ClosingDateNotFuture);
        }

        Ok(Self {
            name: name.to_owned(),
            location: location.to_owned(),
            capability: capability.to_owned(),
            band: band.to_owned(),
            closing_date,
            summary: summary.to_owned(),
            key_responsibilities: key_responsibilities.to_owned(),
            status: JobStatus::from_backend(input.status.trim()),
            open_positions,
        })
    }
}
