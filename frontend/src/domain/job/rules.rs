//! Job lifecycle rules: the primary-action decision table and display
//! metadata derived from a `(job, viewer)` pair.
//!
//! Everything here is a pure function; re-rendering a page with unchanged
//! inputs yields unchanged output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::job::{Job, JobStatus};
use crate::domain::user::Viewer;

/// The single action a viewer may take on a job.
///
/// Resolution is an ordered decision table; a given `(job, viewer)` pair
/// always yields exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    /// Admins review instead of applying, regardless of job state.
    ViewApplications,
    /// Authenticated member on an open job with positions.
    Apply,
    /// Anonymous viewer on an open job with positions.
    LoginToApply,
    /// Open job with no positions remaining (disabled affordance).
    NoPositions,
    /// Closed job (disabled affordance).
    Closed,
}

/// Resolve the primary action for a job and viewer. First match wins.
pub fn primary_action(job: &Job, viewer: &Viewer) -> JobAction {
    match viewer {
        Viewer::Admin(_) => JobAction::ViewApplications,
        Viewer::Member(_) if job.accepts_applications() => JobAction::Apply,
        Viewer::Anonymous if job.accepts_applications() => JobAction::LoginToApply,
        _ if job.status == JobStatus::Open => JobAction::NoPositions,
        _ => JobAction::Closed,
    }
}

/// Display metadata for an action affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub show: bool,
    pub text: &'static str,
    pub href: String,
    pub class: &'static str,
    pub disabled: bool,
}

impl ActionButton {
    fn hidden() -> Self {
        Self {
            show: false,
            text: "",
            href: String::new(),
            class: "",
            disabled: false,
        }
    }
}

const ADMIN_BUTTON: &str = "btn btn-sm bg-purple-600 hover:bg-purple-700 text-white border-none";
const APPLY_BUTTON: &str = "btn bg-blue-600 hover:bg-blue-700 text-white border-none";
const APPLY_BUTTON_WIDE: &str = "btn bg-blue-600 hover:bg-blue-700 text-white border-none w-full";
const DISABLED_BUTTON: &str = "btn bg-gray-400 text-white border-none cursor-not-allowed";
const DISABLED_BUTTON_WIDE: &str =
    "btn bg-gray-400 text-white border-none w-full cursor-not-allowed";

/// The login link carrying the apply form as the post-login destination.
pub fn login_to_apply_href(job_id: i64) -> String {
    format!("/login?redirectTo=/jobs/{job_id}/apply")
}

impl JobAction {
    /// Card-sized button shown on job listings and the detail header.
    pub fn card_button(self, job_id: i64) -> ActionButton {
        match self {
            Self::ViewApplications => ActionButton {
                show: true,
                text: "View Applications",
                href: format!("/jobs/{job_id}/applications"),
                class: ADMIN_BUTTON,
                disabled: false,
            },
            Self::Apply => ActionButton {
                show: true,
                text: "Apply Now",
                href: format!("/jobs/{job_id}/apply"),
                class: APPLY_BUTTON,
                disabled: false,
            },
            Self::LoginToApply => ActionButton {
                show: true,
                text: "Login to Apply",
                href: login_to_apply_href(job_id),
                class: APPLY_BUTTON,
                disabled: false,
            },
            Self::NoPositions => ActionButton {
                show: true,
                text: "No Positions",
                href: String::new(),
                class: DISABLED_BUTTON,
                disabled: true,
            },
            Self::Closed => ActionButton {
                show: true,
                text: "Closed",
                href: String::new(),
                class: DISABLED_BUTTON,
                disabled: true,
            },
        }
    }

    /// Full-width variant for the detail sidebar. Admins get no apply
    /// affordance there; they see the manage section instead.
    fn sidebar_button(self, job_id: i64) -> ActionButton {
        match self {
            Self::ViewApplications => ActionButton::hidden(),
            Self::Apply => ActionButton {
                show: true,
                text: "Apply Now",
                href: format!("/jobs/{job_id}/apply"),
                class: APPLY_BUTTON_WIDE,
                disabled: false,
            },
            Self::LoginToApply => ActionButton {
                show: true,
                text: "Login to Apply",
                href: login_to_apply_href(job_id),
                class: APPLY_BUTTON_WIDE,
                disabled: false,
            },
            Self::NoPositions => ActionButton {
                show: true,
                text: "No Positions Available",
                href: String::new(),
                class: DISABLED_BUTTON_WIDE,
                disabled: true,
            },
            Self::Closed => ActionButton {
                show: true,
                text: "Applications Closed",
                href: String::new(),
                class: DISABLED_BUTTON_WIDE,
                disabled: true,
            },
        }
    }
}

/// Header and sidebar affordances for the job detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDetailActions {
    pub header: ActionButton,
    pub show_apply_section: bool,
    pub show_manage_section: bool,
    pub apply: ActionButton,
}

/// Derive the detail-page actions for a job and viewer.
pub fn detail_actions(job: &Job, viewer: &Viewer) -> JobDetailActions {
    let action = primary_action(job, viewer);
    let is_admin = viewer.is_admin();
    JobDetailActions {
        header: action.card_button(job.id),
        show_apply_section: !is_admin,
        show_manage_section: is_admin,
        apply: action.sidebar_button(job.id),
    }
}

/// Styling for a job's open/closed badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub text: &'static str,
    pub color: &'static str,
    pub icon_class: &'static str,
    pub badge_class: &'static str,
}

/// Two-value status mapping; no further branching.
pub fn status_display(status: JobStatus) -> StatusDisplay {
    match status {
        JobStatus::Open => StatusDisplay {
            text: "Open",
            color: "text-green-600",
            icon_class: "circle-check",
            badge_class: "bg-green-100 text-green-800",
        },
        JobStatus::Closed => StatusDisplay {
            text: "Closed",
            color: "text-red-600",
            icon_class: "circle-x",
            badge_class: "bg-red-100 text-red-800",
        },
    }
}

/// "N position"/"N positions" label.
pub fn positions_text(count: u32) -> String {
    if count == 1 {
        "1 position".to_owned()
    } else {
        format!("{count} positions")
    }
}

/// Closing dates render in en-GB day-first order.
pub fn format_closing_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
