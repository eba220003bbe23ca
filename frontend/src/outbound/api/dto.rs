//! DTOs for the backend API's JSON payloads.
//!
//! The adapters decode into these transport DTOs first, then map into domain
//! types in one pass. Envelopes are untagged because the backend wraps some
//! payloads in a `data` object and returns others bare.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::application::{Application, ApplicationStatus, NewApplication};
use crate::domain::job::{Job, JobDraft, JobStatus};
use crate::domain::user::{Role, User};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum JobListEnvelope {
    Keyed {
        data: Vec<JobDto>,
        total: Option<u32>,
    },
    Named {
        jobs: Vec<JobDto>,
    },
    Bare(Vec<JobDto>),
}

impl JobListEnvelope {
    pub(super) fn into_parts(self) -> (Vec<JobDto>, Option<u32>) {
        match self {
            Self::Keyed { data, total } => (data, total),
            Self::Named { jobs } | Self::Bare(jobs) => (jobs, None),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum JobEnvelope {
    Keyed { data: JobDto },
    Named { job: JobDto },
    Bare(JobDto),
}

impl JobEnvelope {
    pub(super) fn into_inner(self) -> JobDto {
        match self {
            Self::Keyed { data } | Self::Named { job: data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JobDto {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) location: String,
    pub(super) capability: String,
    pub(super) band: String,
    pub(super) closing_date: String,
    #[serde(default)]
    pub(super) summary: String,
    #[serde(default)]
    pub(super) key_responsibilities: String,
    pub(super) status: String,
    #[serde(default)]
    pub(super) number_of_open_positions: u32,
}

impl JobDto {
    pub(super) fn into_domain_job(self) -> Result<Job, String> {
        let closing_date = parse_backend_date(&self.closing_date)
            .ok_or_else(|| format!("job {} has malformed closing date", self.id))?;
        Ok(Job {
            id: self.id,
            name: self.name,
            location: self.location,
            capability: self.capability,
            band: self.band,
            closing_date,
            summary: self.summary,
            key_responsibilities: self.key_responsibilities,
            status: JobStatus::from_backend(&self.status),
            open_positions: self.number_of_open_positions,
        })
    }
}

/// Write payload for creating or replacing a job.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JobPayload<'a> {
    name: &'a str,
    location: &'a str,
    capability: &'a str,
    band: &'a str,
    closing_date: String,
    summary: &'a str,
    key_responsibilities: &'a str,
    status: &'static str,
    number_of_open_positions: u32,
}

impl<'a> From<&'a JobDraft> for JobPayload<'a> {
    fn from(draft: &'a JobDraft) -> Self {
        Self {
            name: &draft.name,
            location: &draft.location,
            capability: &draft.capability,
            band: &draft.band,
            closing_date: draft.closing_date.format("%Y-%m-%d").to_string(),
            summary: &draft.summary,
            key_responsibilities: &draft.key_responsibilities,
            status: draft.status.as_str(),
            number_of_open_positions: draft.open_positions,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum IdEnvelope {
    Keyed { data: IdDto },
    Bare(IdDto),
}

impl IdEnvelope {
    pub(super) fn id(self) -> i64 {
        match self {
            Self::Keyed { data } | Self::Bare(data) => data.id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct IdDto {
    pub(super) id: i64,
}

#[derive(Debug, Deserialize)]
pub(super) struct DataEnvelope<T> {
    pub(super) data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApplicationDto {
    pub(super) id: i64,
    pub(super) user_id: Option<i64>,
    pub(super) job_role_id: i64,
    pub(super) applicant_name: Option<String>,
    pub(super) first_name: Option<String>,
    pub(super) last_name: Option<String>,
    pub(super) email: Option<String>,
    pub(super) phone_number: Option<String>,
    pub(super) cv_file_name: Option<String>,
    pub(super) cv_file_path: Option<String>,
    pub(super) cover_letter: Option<String>,
    pub(super) status: String,
    pub(super) created_at: String,
    pub(super) notes: Option<String>,
}

impl ApplicationDto {
    pub(super) fn into_domain_application(self) -> Result<Application, String> {
        let applicant_name = match (self.applicant_name, self.first_name, self.last_name) {
            (Some(name), _, _) => name,
            (None, Some(first), Some(last)) => format!("{first} {last}"),
            _ => {
                return Err(format!("application {} has no applicant name", self.id));
            }
        };
        let submitted_on = parse_backend_date(&self.created_at)
            .ok_or_else(|| format!("application {} has malformed creation date", self.id))?;
        // Relative path so the download goes through the portal's own proxy.
        let cv_url = self.cv_file_path.map(|path| {
            let trimmed = path.trim_start_matches('/');
            format!("/{trimmed}")
        });
        Ok(Application {
            id: self.id,
            job_id: self.job_role_id,
            applicant_name,
            email: self
                .email
                .unwrap_or_else(|| "unknown@example.com".to_owned()),
            phone_number: self.phone_number.filter(|phone| !phone.is_empty()),
            cv_url,
            cv_file_name: self.cv_file_name,
            cover_letter: self.cover_letter,
            submitted_on,
            status: ApplicationStatus::from_backend(&self.status),
            notes: self.notes,
            user_id: self.user_id,
        })
    }
}

/// Write payload for submitting an application.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewApplicationPayload<'a> {
    user_id: i64,
    job_role_id: i64,
    applicant_name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<&'a str>,
    cover_letter: &'a str,
}

impl<'a> From<&'a NewApplication> for NewApplicationPayload<'a> {
    fn from(application: &'a NewApplication) -> Self {
        Self {
            user_id: application.user_id,
            job_role_id: application.job_id,
            applicant_name: &application.applicant_name,
            email: &application.email,
            phone_number: application.phone_number.as_deref(),
            cover_letter: &application.cover_letter,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ReviewPayload<'a> {
    pub(super) notes: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct LoginPayload<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponseDto {
    pub(super) user: Option<SessionUserDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SessionUserDto {
    pub(super) id: i64,
    pub(super) first_name: Option<String>,
    pub(super) last_name: Option<String>,
    pub(super) display_name: Option<String>,
    pub(super) email: String,
    pub(super) role: String,
}

impl SessionUserDto {
    pub(super) fn into_domain_user(self) -> Result<User, String> {
        let display_name = match (self.display_name, self.first_name, self.last_name) {
            (Some(name), _, _) => name,
            (None, Some(first), Some(last)) => format!("{first} {last}"),
            (None, Some(first), None) => first,
            _ => return Err(format!("user {} has no display name", self.id)),
        };
        // Only an explicit admin role grants elevated access.
        let role = if self.role.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Member
        };
        User::new(self.id, display_name, self.email, role).map_err(|error| error.to_string())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RegisterPayload<'a> {
    pub(super) display_name: &'a str,
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

/// The backend timestamps dates as either `YYYY-MM-DD` or a full ISO-8601
/// instant. Only the calendar date matters to the portal.
fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
