//! View models assembled by handlers and consumed by the renderer.
//!
//! These are plain data: every visibility decision is made here or in the
//! domain rules, never in the renderer.

use serde::Serialize;

use crate::domain::job::rules::{self, ActionButton, StatusDisplay};
use crate::domain::job::Job;
use crate::domain::user::Viewer;

/// One entry in the site navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub text: &'static str,
    pub href: &'static str,
}

/// The logged-in user's name and optional admin badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBadge {
    pub display_name: String,
    pub has_admin_badge: bool,
    pub admin_badge_text: &'static str,
    pub admin_badge_class: &'static str,
}

/// Everything the page header needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderState {
    pub navigation: Vec<NavItem>,
    pub user: Option<UserBadge>,
    pub is_authenticated: bool,
    pub show_login_button: bool,
    pub show_logout_button: bool,
}

/// Build the header for a viewer. The role-specific entry sits between
/// Jobs and About.
pub fn header_state(viewer: &Viewer) -> HeaderState {
    let mut navigation = vec![
        NavItem { text: "Home", href: "/" },
        NavItem { text: "Jobs", href: "/jobs" },
        NavItem { text: "About", href: "#" },
        NavItem { text: "Contact", href: "#" },
    ];
    match viewer {
        Viewer::Admin(_) => navigation.insert(
            2,
            NavItem { text: "Create Job", href: "/jobs/create" },
        ),
        Viewer::Member(_) => navigation.insert(
            2,
            NavItem { text: "View Applications", href: "/my-applications" },
        ),
        Viewer::Anonymous => {}
    }
    let user = viewer.user().map(|user| UserBadge {
        display_name: user.display_name().to_owned(),
        has_admin_badge: user.is_admin(),
        admin_badge_text: "Admin",
        admin_badge_class: "bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full ml-1",
    });
    let is_authenticated = viewer.is_authenticated();
    HeaderState {
        navigation,
        user,
        is_authenticated,
        show_login_button: !is_authenticated,
        show_logout_button: is_authenticated,
    }
}

/// Paging summary for the jobs listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub total: u32,
    pub limit: u32,
}

/// Compute paging state from a 1-based page number and the total match
/// count.
pub fn paginate(page: u32, total: u32, limit: u32) -> Pagination {
    // An empty result still renders as one page.
    let total_pages = total.div_ceil(limit).max(1);
    Pagination {
        current_page: page,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
        total,
        limit,
    }
}

/// A job formatted for a listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCard {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capability: String,
    pub band: String,
    pub closing_date: String,
    pub summary: String,
    pub positions_text: String,
    pub status: StatusDisplay,
    pub button: ActionButton,
}

/// Format one job for a card, resolving its action for the viewer.
pub fn job_card(job: &Job, viewer: &Viewer) -> JobCard {
    JobCard {
        id: job.id,
        name: job.name.clone(),
        location: job.location.clone(),
        capability: job.capability.clone(),
        band: job.band.clone(),
        closing_date: rules::format_closing_date(job.closing_date),
        summary: job.summary.clone(),
        positions_text: rules::positions_text(job.open_positions),
        status: rules::status_display(job.status),
        button: rules::primary_action(job, viewer).card_button(job.id),
    }
}

/// Distinct values for the listing filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub capabilities: Vec<String>,
    pub bands: Vec<String>,
}

fn unique_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Extract dropdown options from the unfiltered job list.
pub fn filter_options(jobs: &[Job]) -> FilterOptions {
    FilterOptions {
        locations: unique_sorted(jobs.iter().map(|job| job.location.clone())),
        capabilities: unique_sorted(jobs.iter().map(|job| job.capability.clone())),
        bands: unique_sorted(jobs.iter().map(|job| job.band.clone())),
    }
}

/// An application formatted for list rows and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub id: i64,
    pub job_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub cv_url: Option<String>,
    pub cv_file_name: Option<String>,
    pub cover_letter: Option<String>,
    pub submitted_on: String,
    pub notes: Option<String>,
    pub status: crate::domain::application::StatusDisplay,
    pub detail_href: String,
}

/// Format an application for the admin review pages.
pub fn admin_application_view(application: &crate::domain::application::Application) -> ApplicationView {
    application_view(
        application,
        format!(
            "/jobs/{}/applications/{}",
            application.job_id, application.id
        ),
    )
}

/// Format an application for the owner's my-applications pages.
pub fn my_application_view(application: &crate::domain::application::Application) -> ApplicationView {
    application_view(application, format!("/my-applications/{}", application.id))
}

fn application_view(
    application: &crate::domain::application::Application,
    detail_href: String,
) -> ApplicationView {
    ApplicationView {
        id: application.id,
        job_id: application.job_id,
        applicant_name: application.applicant_name.clone(),
        email: application.email.clone(),
        phone_number: application.phone_number.clone(),
        cv_url: application.cv_url.clone(),
        cv_file_name: application.cv_file_name.clone(),
        cover_letter: application.cover_letter.clone(),
        submitted_on: rules::format_closing_date(application.submitted_on),
        notes: application.notes.clone(),
        status: crate::domain::application::status_display(&application.status),
        detail_href,
    }
}
