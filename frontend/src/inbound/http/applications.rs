//! Application submission, tracking, and review handlers.

use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use crate::domain::application::{
    review_actions, validate_submission, NewApplication, ReviewDecision,
};
use crate::domain::notice::{ErrorNotice, SuccessNotice};
use crate::domain::ports::GatewayError;
use crate::domain::{ApiResult, Viewer};
use crate::inbound::http::guards::{AdminOnly, MemberOnly};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    admin_application_view, header_state, job_card, my_application_view,
};
use crate::inbound::http::{html, parse_id, render, see_other};

#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    error: Option<String>,
    success: Option<String>,
}

#[get("/jobs/{id}/apply")]
pub async fn show_apply_form(
    MemberOnly(member): MemberOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> HttpResponse {
    let Ok(job_id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    let job = match state.jobs.get(job_id).await {
        Ok(job) => job,
        Err(error) => {
            warn!(%error, job_id, "failed to load job for apply form");
            return see_other("/jobs?error=not-found");
        }
    };
    if !job.accepts_applications() {
        return see_other(format!("/jobs/{job_id}?error=not-available"));
    }
    let viewer = Viewer::Member(member);
    html(render::apply_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        &job_card(&job, &viewer),
    ))
}

#[derive(Debug, Deserialize)]
pub struct ApplicationForm {
    #[serde(rename = "applicantName", default)]
    applicant_name: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "phoneNumber")]
    phone_number: Option<String>,
    #[serde(rename = "coverLetter", default)]
    cover_letter: String,
}

#[post("/jobs/{id}/apply")]
pub async fn submit_application(
    MemberOnly(member): MemberOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<ApplicationForm>,
) -> HttpResponse {
    let Ok(job_id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    if let Err(error) = validate_submission(&form.applicant_name, &form.email, &form.cover_letter)
    {
        return see_other(format!(
            "/jobs/{job_id}/apply?error={}",
            error.redirect_code()
        ));
    }
    let job = match state.jobs.get(job_id).await {
        Ok(job) => job,
        Err(error) => {
            warn!(%error, job_id, "failed to load job for submission");
            return see_other("/jobs?error=not-found");
        }
    };
    if !job.accepts_applications() {
        return see_other(format!("/jobs/{job_id}?error=not-available"));
    }
    // One application per user per job.
    match state
        .applications
        .for_user_and_job(member.id(), job_id)
        .await
    {
        Ok(Some(_)) => {
            return see_other(format!("/jobs/{job_id}/apply?error=already-applied"));
        }
        Ok(None) => {}
        Err(error) => {
            warn!(%error, job_id, "duplicate check failed");
            return see_other(format!("/jobs/{job_id}/apply?error=submission-failed"));
        }
    }
    let phone_number = form
        .phone_number
        .as_deref()
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .map(ToOwned::to_owned);
    let application = NewApplication {
        job_id,
        user_id: member.id(),
        applicant_name: form.applicant_name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        phone_number,
        cover_letter: form.cover_letter.trim().to_owned(),
    };
    match state.applications.submit(&application).await {
        Ok(_) => see_other(format!("/jobs/{job_id}/apply/success")),
        Err(GatewayError::Conflict) => {
            see_other(format!("/jobs/{job_id}/apply?error=already-applied"))
        }
        Err(error) => {
            warn!(%error, job_id, "application submission failed");
            see_other(format!("/jobs/{job_id}/apply?error=submission-failed"))
        }
    }
}

#[get("/jobs/{id}/apply/success")]
pub async fn application_submitted(
    MemberOnly(member): MemberOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(job_id) = parse_id(&path) else {
        return see_other("/jobs?error=invalid-id");
    };
    let job = match state.jobs.get(job_id).await {
        Ok(job) => job,
        Err(error) => {
            warn!(%error, job_id, "failed to load job for success page");
            return see_other("/jobs?error=not-found");
        }
    };
    let viewer = Viewer::Member(member);
    html(render::apply_success_page(
        &header_state(&viewer),
        &job_card(&job, &viewer),
    ))
}

#[get("/my-applications")]
pub async fn my_applications(
    MemberOnly(member): MemberOnly,
    state: web::Data<HttpState>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<HttpResponse> {
    let applications = state.applications.for_user(member.id()).await?;
    let jobs = state.jobs.all().await?;
    let names: HashMap<i64, &str> = jobs
        .iter()
        .map(|job| (job.id, job.name.as_str()))
        .collect();
    let rows: Vec<_> = applications
        .iter()
        .map(|application| {
            let name = names
                .get(&application.job_id)
                .copied()
                .unwrap_or("Unknown role")
                .to_owned();
            (my_application_view(application), name)
        })
        .collect();
    let viewer = Viewer::Member(member);
    Ok(html(render::my_applications_page(
        &header_state(&viewer),
        &SuccessNotice::from_code(query.success.as_deref()),
        &rows,
    )))
}

#[get("/my-applications/{id}")]
pub async fn my_application_detail(
    MemberOnly(member): MemberOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(application_id) = parse_id(&path) else {
        return see_other("/my-applications?error=invalid-id");
    };
    let application = match state.applications.get(application_id).await {
        Ok(application) => application,
        Err(error) => {
            warn!(%error, application_id, "failed to load application");
            return see_other("/my-applications?error=not-found");
        }
    };
    // Another user's application is indistinguishable from a missing one.
    if !application.belongs_to(member.id()) {
        return see_other("/my-applications?error=not-found");
    }
    let job_name = match state.jobs.get(application.job_id).await {
        Ok(job) => job.name,
        Err(_) => "Unknown role".to_owned(),
    };
    let viewer = Viewer::Member(member);
    html(render::my_application_detail_page(
        &header_state(&viewer),
        &my_application_view(&application),
        &job_name,
    ))
}

#[get("/jobs/{id}/applications")]
pub async fn list_applications(
    AdminOnly(admin): AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<HttpResponse> {
    let Ok(job_id) = parse_id(&path) else {
        return Ok(see_other("/jobs?error=invalid-id"));
    };
    let job = match state.jobs.get(job_id).await {
        Ok(job) => job,
        Err(GatewayError::NotFound) => {
            return Ok(see_other("/jobs?error=not-found"));
        }
        Err(error) => return Err(error.into()),
    };
    let applications = state.applications.for_job(job_id).await?;
    let rows: Vec<_> = applications.iter().map(admin_application_view).collect();
    let viewer = Viewer::Admin(admin);
    Ok(html(render::applications_page(
        &header_state(&viewer),
        &ErrorNotice::from_code(query.error.as_deref()),
        &job.name,
        &rows,
    )))
}

#[get("/jobs/{id}/applications/{application_id}")]
pub async fn application_detail(
    AdminOnly(admin): AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<HttpResponse> {
    let (raw_job_id, raw_application_id) = path.into_inner();
    let (Ok(job_id), Ok(application_id)) = (parse_id(&raw_job_id), parse_id(&raw_application_id))
    else {
        return Ok(see_other("/jobs?error=invalid-id"));
    };
    let job = match state.jobs.get(job_id).await {
        Ok(job) => job,
        Err(GatewayError::NotFound) => {
            return Ok(see_other("/jobs?error=not-found"));
        }
        Err(error) => return Err(error.into()),
    };
    let application = match state.applications.get(application_id).await {
        Ok(application) => application,
        Err(GatewayError::NotFound) => {
            return Ok(see_other(format!(
                "/jobs/{job_id}/applications?error=not-found"
            )));
        }
        Err(error) => return Err(error.into()),
    };
    // An application reached through the wrong job's URL does not exist.
    if application.job_id != job_id {
        return Ok(see_other(format!(
            "/jobs/{job_id}/applications?error=not-found"
        )));
    }
    let viewer = Viewer::Admin(admin);
    let review = review_actions(&application.status, &viewer);
    Ok(html(render::application_detail_page(
        &header_state(&viewer),
        &SuccessNotice::from_code(query.success.as_deref()),
        &admin_application_view(&application),
        &job.name,
        review,
    )))
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    notes: Option<String>,
}

async fn review(
    state: &HttpState,
    path: (String, String),
    form: &ReviewForm,
    decision: ReviewDecision,
) -> HttpResponse {
    let (raw_job_id, raw_application_id) = path;
    let (Ok(job_id), Ok(application_id)) = (parse_id(&raw_job_id), parse_id(&raw_application_id))
    else {
        return see_other("/jobs?error=invalid-id");
    };
    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .unwrap_or_else(|| decision.default_notes());
    match state.applications.review(application_id, decision, notes).await {
        Ok(()) => see_other(format!(
            "/jobs/{job_id}/applications/{application_id}?success={}",
            decision.success_code()
        )),
        Err(error) => {
            warn!(%error, application_id, "review update failed");
            see_other(format!("/jobs/{job_id}/applications?error=update-failed"))
        }
    }
}

#[post("/jobs/{id}/applications/{application_id}/accept")]
pub async fn accept_application(
    _admin: AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    form: web::Form<ReviewForm>,
) -> HttpResponse {
    review(&state, path.into_inner(), &form, ReviewDecision::Accept).await
}

#[post("/jobs/{id}/applications/{application_id}/reject")]
pub async fn reject_application(
    _admin: AdminOnly,
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    form: web::Form<ReviewForm>,
) -> HttpResponse {
    review(&state, path.into_inner(), &form, ReviewDecision::Reject).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    use crate::domain::application::tests::pending_application;
    use crate::domain::application::ApplicationStatus;
    use crate::domain::job::tests::{closed_job, open_job};
    use crate::domain::ports::fixtures::{FixtureApplicationsGateway, FixtureJobsGateway};
    use crate::domain::ports::ApplicationsGateway;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{login_as_admin, login_as_member, portal_app};

    // The seeded member account has user id 2.
    const MEMBER_ID: i64 = 2;

    fn location(response: &actix_web::dev::ServiceResponse) -> String {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }

    fn state_with(
        jobs: Vec<crate::domain::job::Job>,
        applications: Vec<crate::domain::application::Application>,
    ) -> (HttpState, Arc<FixtureApplicationsGateway>) {
        let gateway = Arc::new(FixtureApplicationsGateway::with_applications(applications));
        let state = HttpState {
            jobs: Arc::new(FixtureJobsGateway::with_jobs(jobs)),
            applications: gateway.clone(),
            ..HttpState::fixture()
        };
        (state, gateway)
    }

    fn valid_application() -> Vec<(&'static str, &'static str)> {
        vec![
            ("applicantName", "Jo Bloggs"),
            ("email", "member@example.com"),
            ("phoneNumber", "07700 900123"),
            (
                "coverLetter",
                "I am writing to express a strong interest in this position.",
            ),
        ]
    }

    #[actix_web::test]
    async fn members_can_open_the_apply_form() {
        let (state, _) = state_with(vec![open_job(5, 2)], vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/5/apply")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("Apply for Software Engineer 5"));
    }

    #[actix_web::test]
    async fn closed_jobs_bounce_to_the_detail_page() {
        let (state, _) = state_with(vec![closed_job(6)], vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/6/apply")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/6?error=not-available");
    }

    #[actix_web::test]
    async fn short_cover_letters_never_reach_the_backend() {
        let (state, gateway) = state_with(vec![open_job(5, 2)], vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let mut form = valid_application();
        for field in &mut form {
            if field.0 == "coverLetter" {
                field.1 = "too short";
            }
        }
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/5/apply")
                .cookie(cookie)
                .set_form(form)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/5/apply?error=validation-failed");
        assert_eq!(gateway.submit_calls(), 0);
    }

    #[actix_web::test]
    async fn duplicate_applications_are_rejected() {
        let (state, gateway) = state_with(
            vec![open_job(5, 2)],
            vec![pending_application(1, 5, MEMBER_ID)],
        );
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/5/apply")
                .cookie(cookie)
                .set_form(valid_application())
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/5/apply?error=already-applied");
        assert_eq!(gateway.submit_calls(), 0);
    }

    #[actix_web::test]
    async fn successful_submission_lands_on_the_confirmation_page() {
        let (state, gateway) = state_with(vec![open_job(5, 2)], vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/5/apply")
                .cookie(cookie.clone())
                .set_form(valid_application())
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/5/apply/success");
        let stored = gateway
            .for_user_and_job(MEMBER_ID, 5)
            .await
            .expect("lookup")
            .expect("stored application");
        assert_eq!(stored.applicant_name, "Jo Bloggs");
        assert_eq!(stored.status, ApplicationStatus::Pending);

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/5/apply/success")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn my_applications_lists_only_the_owners_rows() {
        let (state, _) = state_with(
            vec![open_job(5, 2)],
            vec![
                pending_application(1, 5, MEMBER_ID),
                pending_application(2, 5, 99),
            ],
        );
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/my-applications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("/my-applications/1"));
        assert!(!body.contains("/my-applications/2"));
    }

    #[actix_web::test]
    async fn another_users_application_reads_as_missing() {
        let (state, _) = state_with(vec![open_job(5, 2)], vec![pending_application(2, 5, 99)]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_member(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/my-applications/2")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/my-applications?error=not-found");
    }

    #[actix_web::test]
    async fn admins_list_applications_for_a_job() {
        let (state, _) = state_with(
            vec![open_job(5, 2)],
            vec![pending_application(1, 5, MEMBER_ID)],
        );
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/5/applications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("/jobs/5/applications/1"));
    }

    #[actix_web::test]
    async fn mismatched_job_and_application_read_as_missing() {
        let (state, _) = state_with(
            vec![open_job(5, 2), open_job(6, 2)],
            vec![pending_application(1, 5, MEMBER_ID)],
        );
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/6/applications/1")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/6/applications?error=not-found");
    }

    #[actix_web::test]
    async fn accepting_records_the_decision_with_default_notes() {
        let (state, gateway) = state_with(
            vec![open_job(5, 2)],
            vec![pending_application(1, 5, MEMBER_ID)],
        );
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/5/applications/1/accept")
                .cookie(cookie)
                .set_form([("notes", "")])
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/5/applications/1?success=accepted");
        let application = gateway.get(1).await.expect("application kept");
        assert_eq!(application.status, ApplicationStatus::Accepted);
        assert_eq!(
            application.notes.as_deref(),
            Some("Application accepted by reviewer")
        );
    }

    #[actix_web::test]
    async fn failed_reviews_bounce_with_update_failed() {
        let gateway = Arc::new(
            FixtureApplicationsGateway::with_applications(vec![pending_application(
                1, 5, MEMBER_ID,
            )])
            .failing_reviews(),
        );
        let state = HttpState {
            jobs: Arc::new(FixtureJobsGateway::with_jobs(vec![open_job(5, 2)])),
            applications: gateway,
            ..HttpState::fixture()
        };
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/jobs/5/applications/1/reject")
                .cookie(cookie)
                .set_form([("notes", "weak application")])
                .to_request(),
        )
        .await;
        assert_eq!(location(&response), "/jobs/5/applications?error=update-failed");
    }

    #[actix_web::test]
    async fn admins_cannot_open_the_apply_form() {
        let (state, _) = state_with(vec![open_job(5, 2)], vec![]);
        let app = test::init_service(portal_app(state)).await;
        let cookie = login_as_admin(&app).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/jobs/5/apply")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
