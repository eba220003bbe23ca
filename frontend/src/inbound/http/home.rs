//! Landing page.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::notice::SuccessNotice;
use crate::domain::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{header_state, job_card};
use crate::inbound::http::{html, render};

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    success: Option<String>,
}

/// The three roles closing furthest in the future, newest first.
#[get("/")]
pub async fn home(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<HomeQuery>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer();
    let mut jobs = state.jobs.all().await?;
    jobs.sort_by(|a, b| b.closing_date.cmp(&a.closing_date));
    let latest: Vec<_> = jobs
        .iter()
        .take(3)
        .map(|job| job_card(job, &viewer))
        .collect();
    Ok(html(render::home_page(
        &header_state(&viewer),
        &SuccessNotice::from_code(query.success.as_deref()),
        &latest,
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;

    use crate::domain::job::tests::open_job;
    use crate::domain::ports::fixtures::FixtureJobsGateway;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::portal_app;

    fn seeded_state() -> HttpState {
        let mut jobs = Vec::new();
        for id in 1..=5 {
            let mut job = open_job(id, 1);
            let day = u32::try_from(id).expect("small id");
            job.closing_date = chrono::NaiveDate::from_ymd_opt(2030, 1, day).expect("valid date");
            jobs.push(job);
        }
        HttpState {
            jobs: Arc::new(FixtureJobsGateway::with_jobs(jobs)),
            ..HttpState::fixture()
        }
    }

    #[actix_web::test]
    async fn shows_the_three_latest_roles() {
        let app = test::init_service(portal_app(seeded_state())).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        // Jobs closing on the 5th, 4th, and 3rd make the cut.
        assert!(body.contains("Software Engineer 5"));
        assert!(body.contains("Software Engineer 3"));
        assert!(!body.contains("Software Engineer 2"));
    }

    #[actix_web::test]
    async fn renders_a_success_notice_from_the_query() {
        let app = test::init_service(portal_app(seeded_state())).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/?success=login").to_request(),
        )
        .await;
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("Login successful!"));
    }
}
