//! Job listing, detail, and admin lifecycle handlers.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use crate::domain::job::rules::detail_actions;
use crate::domain::job::{JobDraft, JobDraftInput};
use crate::domain::notice::{ErrorNotice, SuccessNotice};
use crate::domain::ports::{GatewayError, JobQuery};
use crate::domain::ApiResult;
use crate::inbound::http::guards::AdminOnly;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{filter_options, header_state, job_card, paginate};
use crate::inbound::http::{html, parse_id, render, see_other};

/// Listing page size.
const PAGE_SIZE: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<u32>,
    search: Option<String>,
    location: Option<String>,
    capability: Option<String>,
    band: Option<String>,
    error: Option<String>,
    success: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}

#[get("/jobs")]
pub async fn list_jobs(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer();
    let page = query.page.unwrap_or(1).max(1);
    let search = non_empty(query.search.as_ref());
    let location = non_empty(query.location.as_ref());
    let capability = non_empty(query.capability.as_ref());
    let band = non_empty(query.band.as_ref());

    let job_query = JobQuery {
        limit: Some(PAGE_SIZE),
        offset: Some((page - 1) * PAGE_SIZE),
        search: search.clone(),
        location: location.clone(),
        capability: capability.clone(),
        band: band.clone(),
    };
    let page_result = state.jobs.list(&job_query).await?;
    // Dropdown options come from the unfiltered list.
    let all_jobs = state.jobs.all().await?;

    let cards: Vec<_> = page_result
        .jobs
        .iter()
        .map(|job| job_card(job, &viewer))
        .collect();
    let options = filter_options(&all_jobs);
    let view = render::JobsPage {
        header: &header_state(&viewer),
        error: &ErrorNotice::from_code(query.error.as_deref()),
        success: &SuccessNotice::from_code(query.success.as_deref()),
        is_admin: viewer.is_admin(),
        search: search.as_deref().unwrap_or(""),
        selected_location: location.as_deref(),
        selected_capability: capability.as_deref(),
        selected_band: band.as_deref(),
        options: &options,
        cards: &cards,
        pagination: paginate(page, page_result.total, PAGE_SIZE),
    };
    Ok(html(render::jobs_page(&view)))
}

#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    error: Option<String>,
    success: Option<String>,
}

#[get("/jobs/create")]
pub async fn show_create_job(
    AdminOnly(admin): AdminOnly,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let viewer = crate::domain::Viewer::Admin(admin);
    html(render::job_form_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        None,
    ))
}

/// Job form fields, named as the templates post them.
#[derive(Debug, Deserialize)]
pub struct JobForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    capability: String,
    #[serde(default)]
    band: String,
    #[serde(default)]
    summary: String,
    #[serde(rename = "keyResponsibilities", default)]
    key_responsibilities: String,
    #[serde(rename = "numberOfOpenPositions", default)]
    open_positions: String,
    #[serde(rename = "closingDate", default)]
    closing_date: String,
    #[serde(default)]
    status: String,
}

impl JobForm {
    fn draft_input(&self) -> JobDraftInput {
        JobDraftInput {
            name: self.name.clone(),
            location: self.location.clone(),
            capability: self.capability.clone(),
            band: self.band.clone(),
            closing_date: self.closing_date.clone(),
            summary: self.summary.clone(),
            key_responsibilities: self.key_responsibilities.clone(),
            status: self.status.clone(),
            open_positions: self.open_positions.clone(),
        }
    }
}

#[post("/jobs/create")]
pub async fn create_job(
    _admin: AdminOnly,
    state: web::Data<HttpState>,
    form: web::Form<JobForm>,
) -> HttpResponse {
    let today = chrono::Utc::now().date_naive();
    let draft = match JobDraft::try_new(&form.draft_input(), today) {
        Ok(draft) => draft,
        Err(error) => {
            return see_other(format!("/jobs/create?error={}", error.redirect_code()));
        }
    };
    match state.jobs.create(&draft).await {
        Ok(_) => see_other("/jobs?success=created"),
        Err(error) => {
            warn!(%error, "job creation failed");
            see_other("/jobs/create?error=server-error")
        }
    }
}

#[get("/jobs/{id}/edit")]
pub async fn show_edit_job(
    AdminOnly(admin): AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let Ok(id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    let job = match state.jobs.get(id).await {
        Ok(job) => job,
        Err(error) => {
            warn!(%error, id, "failed to load job for editing");
            return see_other("/jobs?error=not-found");
        }
    };
    let viewer = crate::domain::Viewer::Admin(admin);
    html(render::job_form_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        Some(&job),
    ))
}

#[post("/jobs/{id}/edit")]
pub async fn update_job(
    _admin: AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<JobForm>,
) -> HttpResponse {
    let Ok(id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    let today = chrono::Utc::now().date_naive();
    let draft = match JobDraft::try_new(&form.draft_input(), today) {
        Ok(draft) => draft,
        Err(error) => {
            return see_other(format!("/jobs/{id}/edit?error={}", error.redirect_code()));
        }
    };
    match state.jobs.update(id, &draft).await {
        Ok(()) => see_other(format!("/jobs/{id}?success=updated")),
        Err(GatewayError::NotFound) => see_other("/jobs?error=not-found"),
        Err(error) => {
            warn!(%error, id, "job update failed");
            see_other(format!("/jobs/{id}/edit?error=server-error"))
        }
    }
}

#[post("/jobs/{id}/delete")]
pub async fn delete_job(
    _admin: AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    match state.jobs.delete(id).await {
        Ok(()) => see_other("/jobs?success=deleted"),
        Err(error) => {
            warn!(%error, id, "job deletion failed");
            see_other(format!("/jobs/{id}?error=delete-failed"))
        }
    }
}

#[get("/jobs/{id}")]
pub async fn job_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<HttpResponse> {
    let Ok(id) = parse_id(&path) else {
        return Ok(see_other("/jobs?error=invalid-id"));
    };
    let viewer = session.viewer();
    let job = match state.jobs.get(id).await {
        Ok(job) => job,
        Err(GatewayError::NotFound) => {
            return Ok(see_other("/jobs?error=not-found"));
        }
        Err(error) => return Err(error.into()),
    };
    let actions = detail_actions(&job, &viewer);
    Ok(html(render::job_detail_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        &SuccessNotice::from_code(query.success.as_deref()),
        &job_card(&job, &viewer),
        &job.key_responsibilities,
        &actions,
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    use crate::domain::job::tests::{closed_job, open_job};
    use crate::domain::ports::fixtures::FixtureJobsGateway;
    use crate::domain::ports::JobsGateway;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{login_as_admin, login_as_member, portal_app};

    fn location(response: &actix_web::dev::ServiceResponse) -> String {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }

    fn seeded_state(jobs: Vec<crate::domain::job::Job>) -> (HttpState, Arc<FixtureJobsGateway>) {
        let gateway = Arc::new(FixtureJobsGateway::with_jobs(jobs));
        let state = HttpState {
            jobs: gateway.clone(),
            ..HttpState::fixture()
        };
        (state, gateway)
    }

    fn valid_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Platform Engineer"),
            ("location", "Derry"),
            ("capability", "Platforms"),
            ("band", "Consultant"),
            ("summary", "Run the platform."),
            ("keyResponsibilities", "Keep the lights on."),
            ("numberOfOpenPositions", "2"),
            ("closingDate", "2031-01-31"),
            ("status", "open"),
        ]
    }

    #[actix_web::test]
    async fn listing_pages_ten_at_a_time() {
        let jobs = (1..=13).map(|id| open_job(id, 1)).collect();
        let (state, _) = seeded_state(jobs);
        let app = test::init_service(portal_app(state)).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/jobs").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Software Engineer 10"));
        assert!(!body.contains("Software Engineer 11"));
        assert!(body.contains("Page 1 of 2"));

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/jobs?page=2").to_request(),
        )
        .await;
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("Software Engineer 11"));
    }

    #[actix_web::test]
    async fn search_filters_the_listing() {
        let (state, _) = seeded_state(vec![open_job(1, 1), open_job(2, 1)]);
        let app = test::init_service(portal_app(state)).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs?search=engineer%202")
                .to_request(),
        )
        .await;
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Software Engineer 2"));
        assert!(!body.contains("Software Engineer 1"));
    }

    #[actix_web::test]
    async fn admins_see_the_create_button_on_the_listing() {
        let (state, _) = seeded_state(vec![open_job(1, 1)]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/jobs").cookie(cookie).to_request(),
        )
        .await;
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("/jobs/create"));
        assert!(body.contains("View Applications"));
    }

    #[actix_web::test]
    async fn create_rejects_blank_fields_before_the_backend() {
        let (state, gateway) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let mut form = valid_form();
        form.retain(|(name, _)| *name != "summary");
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/create")
                .cookie(cookie)
                .set_form(form)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/create?error=missing-fields");
        assert!(gateway.all().await.expect("list").is_empty());
    }

    #[actix_web::test]
    async fn create_rejects_past_closing_dates() {
        let (state, _) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let mut form = valid_form();
        for field in &mut form {
            if field.0 == "closingDate" {
                field.1 = "2001-01-01";
            }
        }
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/create")
                .cookie(cookie)
                .set_form(form)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/create?error=validation-failed");
    }

    #[actix_web::test]
    async fn create_persists_and_redirects_with_a_notice() {
        let (state, gateway) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/create")
                .cookie(cookie)
                .set_form(valid_form())
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs?success=created");
        let jobs = gateway.all().await.expect("list");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "Platform Engineer");
    }

    #[actix_web::test]
    async fn members_cannot_reach_the_create_form() {
        let (state, _) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/create")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn update_redirects_to_the_detail_page() {
        let (state, gateway) = seeded_state(vec![open_job(4, 1)]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/4/edit")
                .cookie(cookie)
                .set_form(valid_form())
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/4?success=updated");
        let job = gateway.get(4).await.expect("job kept");
        assert_eq!(job.location, "Derry");
    }

    #[actix_web::test]
    async fn delete_failure_bounces_to_the_detail_page() {
        let gateway = Arc::new(
            FixtureJobsGateway::with_jobs(vec![open_job(4, 1)]).failing_writes(),
        );
        let state = HttpState {
            jobs: gateway,
            ..HttpState::fixture()
        };
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/4/delete")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/4?error=delete-failed");
    }

    #[actix_web::test]
    async fn malformed_ids_redirect_with_a_code() {
        let (state, _) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/jobs/banana").to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs?error=invalid-id");
    }

    #[actix_web::test]
    async fn missing_jobs_redirect_with_not_found() {
        let (state, _) = seeded_state(vec![]);
        let app = test::init_service(portal_app(state)).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/jobs/99").to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs?error=not-found");
    }

    #[actix_web::test]
    async fn closed_jobs_show_the_disabled_sidebar_label() {
        let (state, _) = seeded_state(vec![closed_job(6)]);
        let app = test::init_service(portal_app(state)).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/jobs/6").to_request()).await;
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("Applications Closed"));
    }
}
