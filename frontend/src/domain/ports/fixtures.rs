//! In-memory gateway implementations.
//!
//! These back the handler tests and the demo server. State lives behind a
//! mutex so a fixture can be shared across an application factory; poisoned
//! locks are recovered rather than propagated because fixture state stays
//! valid across a panicking test.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::application::{Application, ApplicationStatus, NewApplication, ReviewDecision};
use crate::domain::auth::{Credentials, Registration};
use crate::domain::job::{Job, JobDraft};
use crate::domain::user::{Role, User};

use super::{
    ApplicationsGateway, AuthGateway, CvDownloads, CvFile, GatewayError, GatewayResult,
    JobPage, JobQuery, JobsGateway,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Jobs gateway backed by a vector.
#[derive(Debug, Default)]
pub struct FixtureJobsGateway {
    jobs: Mutex<Vec<Job>>,
    next_id: AtomicUsize,
    fail_writes: bool,
}

impl FixtureJobsGateway {
    /// Seed the fixture with jobs.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let next_id = jobs.iter().map(|job| job.id).max().unwrap_or(0) + 1;
        Self {
            jobs: Mutex::new(jobs),
            next_id: AtomicUsize::new(usize::try_from(next_id).unwrap_or(1)),
            fail_writes: false,
        }
    }

    /// Make every create/update/delete fail with a backend error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn check_writable(&self) -> GatewayResult<()> {
        if self.fail_writes {
            Err(GatewayError::Backend { status: 500 })
        } else {
            Ok(())
        }
    }

    fn matches(job: &Job, query: &JobQuery) -> bool {
        if let Some(search) = query.search.as_deref() {
            if !job.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(location) = query.location.as_deref() {
            if job.location != location {
                return false;
            }
        }
        if let Some(capability) = query.capability.as_deref() {
            if job.capability != capability {
                return false;
            }
        }
        if let Some(band) = query.band.as_deref() {
            if job.band != band {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl JobsGateway for FixtureJobsGateway {
    async fn list(&self, query: &JobQuery) -> GatewayResult<JobPage> {
        let jobs = lock(&self.jobs);
        let filtered: Vec<Job> = jobs
            .iter()
            .filter(|job| Self::matches(job, query))
            .cloned()
            .collect();
        let total = u32::try_from(filtered.len()).unwrap_or(u32::MAX);
        let offset = query.offset.unwrap_or(0) as usize;
        let page: Vec<Job> = match query.limit {
            Some(limit) => filtered.into_iter().skip(offset).take(limit as usize).collect(),
            None => filtered.into_iter().skip(offset).collect(),
        };
        Ok(JobPage { jobs: page, total })
    }

    async fn all(&self) -> GatewayResult<Vec<Job>> {
        Ok(lock(&self.jobs).clone())
    }

    async fn get(&self, id: i64) -> GatewayResult<Job> {
        lock(&self.jobs)
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn create(&self, draft: &JobDraft) -> GatewayResult<i64> {
        self.check_writable()?;
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst))
            .map_err(|_| GatewayError::Backend { status: 500 })?;
        lock(&self.jobs).push(Job {
            id,
            name: draft.name.clone(),
            location: draft.location.clone(),
            capability: draft.capability.clone(),
            band: draft.band.clone(),
            closing_date: draft.closing_date,
            summary: draft.summary.clone(),
            key_responsibilities: draft.key_responsibilities.clone(),
            status: draft.status,
            open_positions: draft.open_positions,
        });
        Ok(id)
    }

    async fn update(&self, id: i64, draft: &JobDraft) -> GatewayResult<()> {
        self.check_writable()?;
        let mut jobs = lock(&self.jobs);
        let job = jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or(GatewayError::NotFound)?;
        job.name = draft.name.clone();
        job.location = draft.location.clone();
        job.capability = draft.capability.clone();
        job.band = draft.band.clone();
        job.closing_date = draft.closing_date;
        job.summary = draft.summary.clone();
        job.key_responsibilities = draft.key_responsibilities.clone();
        job.status = draft.status;
        job.open_positions = draft.open_positions;
        Ok(())
    }

    async fn delete(&self, id: i64) -> GatewayResult<()> {
        self.check_writable()?;
        let mut jobs = lock(&self.jobs);
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        if jobs.len() == before {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }
}

/// Applications gateway backed by a vector, with a submit-call counter so
/// tests can assert that rejected forms never reach the backend.
#[derive(Debug, Default)]
pub struct FixtureApplicationsGateway {
    applications: Mutex<Vec<Application>>,
    next_id: AtomicUsize,
    submit_calls: AtomicUsize,
    fail_reviews: bool,
}

impl FixtureApplicationsGateway {
    /// Seed the fixture with applications.
    pub fn with_applications(applications: Vec<Application>) -> Self {
        let next_id = applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            applications: Mutex::new(applications),
            next_id: AtomicUsize::new(usize::try_from(next_id).unwrap_or(1)),
            submit_calls: AtomicUsize::new(0),
            fail_reviews: false,
        }
    }

    /// Make every review call fail with a backend error.
    pub fn failing_reviews(mut self) -> Self {
        self.fail_reviews = true;
        self
    }

    /// How many times `submit` has been called, successful or not.
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationsGateway for FixtureApplicationsGateway {
    async fn get(&self, id: i64) -> GatewayResult<Application> {
        lock(&self.applications)
            .iter()
            .find(|application| application.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn for_job(&self, job_id: i64) -> GatewayResult<Vec<Application>> {
        Ok(lock(&self.applications)
            .iter()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn for_user(&self, user_id: i64) -> GatewayResult<Vec<Application>> {
        Ok(lock(&self.applications)
            .iter()
            .filter(|application| application.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn for_user_and_job(
        &self,
        user_id: i64,
        job_id: i64,
    ) -> GatewayResult<Option<Application>> {
        Ok(lock(&self.applications)
            .iter()
            .find(|application| {
                application.user_id == Some(user_id) && application.job_id == job_id
            })
            .cloned())
    }

    async fn submit(&self, application: &NewApplication) -> GatewayResult<i64> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let mut applications = lock(&self.applications);
        let duplicate = applications.iter().any(|existing| {
            existing.user_id == Some(application.user_id)
                && existing.job_id == application.job_id
        });
        if duplicate {
            return Err(GatewayError::Conflict);
        }
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst))
            .map_err(|_| GatewayError::Backend { status: 500 })?;
        applications.push(Application {
            id,
            job_id: application.job_id,
            applicant_name: application.applicant_name.clone(),
            email: application.email.clone(),
            phone_number: application.phone_number.clone(),
            cv_url: None,
            cv_file_name: None,
            cover_letter: Some(application.cover_letter.clone()),
            submitted_on: chrono::Utc::now().date_naive(),
            status: ApplicationStatus::Pending,
            notes: None,
            user_id: Some(application.user_id),
        });
        Ok(id)
    }

    async fn review(&self, id: i64, decision: ReviewDecision, notes: &str) -> GatewayResult<()> {
        if self.fail_reviews {
            return Err(GatewayError::Backend { status: 500 });
        }
        let mut applications = lock(&self.applications);
        let application = applications
            .iter_mut()
            .find(|application| application.id == id)
            .ok_or(GatewayError::NotFound)?;
        application.status = match decision {
            ReviewDecision::Accept => ApplicationStatus::Accepted,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        };
        application.notes = Some(notes.to_owned());
        Ok(())
    }
}

/// An account seeded into [`FixtureAuthGateway`].
#[derive(Debug, Clone)]
struct SeededAccount {
    user: User,
    password: String,
}

/// Auth gateway with a seeded account list.
#[derive(Debug, Default)]
pub struct FixtureAuthGateway {
    accounts: Mutex<Vec<SeededAccount>>,
    next_id: AtomicUsize,
}

/// Password accepted for the seeded demo accounts.
pub const FIXTURE_PASSWORD: &str = "Passw0rd";

impl FixtureAuthGateway {
    /// Seed the default demo accounts: an admin and a member, both using
    /// [`FIXTURE_PASSWORD`].
    pub fn with_default_accounts() -> Self {
        let admin = User::new(1, "Pat Admin", "admin@example.com", Role::Admin);
        let member = User::new(2, "Jo Bloggs", "member@example.com", Role::Member);
        let accounts = [admin, member]
            .into_iter()
            .flatten()
            .map(|user| SeededAccount {
                user,
                password: FIXTURE_PASSWORD.to_owned(),
            })
            .collect();
        Self {
            accounts: Mutex::new(accounts),
            next_id: AtomicUsize::new(3),
        }
    }
}

#[async_trait]
impl AuthGateway for FixtureAuthGateway {
    async fn login(&self, credentials: &Credentials) -> GatewayResult<User> {
        lock(&self.accounts)
            .iter()
            .find(|account| {
                account.user.email() == credentials.email
                    && account.password == credentials.password
            })
            .map(|account| account.user.clone())
            .ok_or(GatewayError::Unauthorized)
    }

    async fn register(&self, registration: &Registration) -> GatewayResult<()> {
        let mut accounts = lock(&self.accounts);
        if accounts
            .iter()
            .any(|account| account.user.email() == registration.email)
        {
            return Err(GatewayError::Conflict);
        }
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst))
            .map_err(|_| GatewayError::Backend { status: 500 })?;
        let user = User::new(
            id,
            registration.display_name.clone(),
            registration.email.clone(),
            Role::Member,
        )
        .map_err(|_| GatewayError::Backend { status: 500 })?;
        accounts.push(SeededAccount {
            user,
            password: registration.password.clone(),
        });
        Ok(())
    }

    async fn logout(&self) -> GatewayResult<()> {
        Ok(())
    }
}

/// CV proxy backed by a map keyed on `(year, month, filename)`.
#[derive(Debug, Default)]
pub struct FixtureCvDownloads {
    files: Mutex<HashMap<(String, String, String), CvFile>>,
}

impl FixtureCvDownloads {
    /// Seed a file at the given upload path.
    pub fn with_file(self, year: &str, month: &str, filename: &str, file: CvFile) -> Self {
        lock(&self.files).insert(
            (year.to_owned(), month.to_owned(), filename.to_owned()),
            file,
        );
        self
    }
}

#[async_trait]
impl CvDownloads for FixtureCvDownloads {
    async fn fetch(&self, year: &str, month: &str, filename: &str) -> GatewayResult<CvFile> {
        lock(&self.files)
            .get(&(year.to_owned(), month.to_owned(), filename.to_owned()))
            .cloned()
            .ok_or(GatewayError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::tests::pending_application;
    use crate::domain::job::tests::open_job;

    #[actix_web::test]
    async fn jobs_fixture_filters_and_pages() {
        let gateway = FixtureJobsGateway::with_jobs(vec![
            open_job(1, 2),
            open_job(2, 1),
            open_job(3, 1),
        ]);
        let page = gateway
            .list(&JobQuery {
                limit: Some(2),
                offset: Some(1),
                ..JobQuery::default()
            })
            .await
            .expect("list jobs");
        assert_eq!(page.total, 3);
        assert_eq!(page.jobs.len(), 2);
        assert_eq!(page.jobs[0].id, 2);

        let page = gateway
            .list(&JobQuery {
                search: Some("engineer 3".to_owned()),
                ..JobQuery::default()
            })
            .await
            .expect("search jobs");
        assert_eq!(page.total, 1);
        assert_eq!(page.jobs[0].id, 3);
    }

    #[actix_web::test]
    async fn duplicate_submissions_conflict() {
        let gateway = FixtureApplicationsGateway::with_applications(vec![pending_application(
            1, 5, 7,
        )]);
        let attempt = NewApplication {
            job_id: 5,
            user_id: 7,
            applicant_name: "Jo Bloggs".to_owned(),
            email: "jo@example.com".to_owned(),
            phone_number: None,
            cover_letter: "A cover letter easily long enough to pass validation checks.".to_owned(),
        };
        let error = gateway.submit(&attempt).await.expect_err("should conflict");
        assert!(matches!(error, GatewayError::Conflict));
        assert_eq!(gateway.submit_calls(), 1);
    }

    #[actix_web::test]
    async fn review_records_decision_and_notes() {
        let gateway =
            FixtureApplicationsGateway::with_applications(vec![pending_application(1, 5, 7)]);
        gateway
            .review(1, ReviewDecision::Accept, "Strong candidate")
            .await
            .expect("review");
        let application = gateway.get(1).await.expect("fetch");
        assert_eq!(application.status, ApplicationStatus::Accepted);
        assert_eq!(application.notes.as_deref(), Some("Strong candidate"));
    }

    #[actix_web::test]
    async fn login_rejects_wrong_passwords() {
        let gateway = FixtureAuthGateway::with_default_accounts();
        let good = Credentials::try_new("member@example.com", FIXTURE_PASSWORD).expect("valid");
        let user = gateway.login(&good).await.expect("login");
        assert_eq!(user.email(), "member@example.com");

        let bad = Credentials::try_new("member@example.com", "wrong").expect("valid");
        let error = gateway.login(&bad).await.expect_err("should fail");
        assert!(matches!(error, GatewayError::Unauthorized));
    }

    #[actix_web::test]
    async fn registration_conflicts_on_duplicate_email() {
        let gateway = FixtureAuthGateway::with_default_accounts();
        let registration = Registration::try_new(
            "Jo Again",
            "member@example.com",
            FIXTURE_PASSWORD,
            FIXTURE_PASSWORD,
        )
        .expect("valid registration");
        let error = gateway
            .register(&registration)
            .await
            .expect_err("should conflict");
        assert!(matches!(error, GatewayError::Conflict));
    }
}
