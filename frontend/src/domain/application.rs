//! Application entity, status lifecycle, and form validation.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::user::Viewer;

/// Minimum cover letter length accepted by the apply form.
pub const MIN_COVER_LETTER_CHARS: usize = 50;

/// Where an application sits in its review lifecycle.
///
/// The backend reports statuses in its own vocabulary; [`from_backend`]
/// folds the known synonyms and carries anything else through verbatim so
/// an unexpected value renders as unknown instead of being silently
/// reclassified.
///
/// [`from_backend`]: ApplicationStatus::from_backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
    /// A status string the portal does not recognise.
    Unrecognised(String),
}

impl ApplicationStatus {
    /// Map a backend status string into the portal vocabulary.
    pub fn from_backend(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in progress" | "pending" => Self::Pending,
            "reviewed" => Self::Reviewed,
            "hired" | "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            _ => Self::Unrecognised(raw.to_owned()),
        }
    }

    /// Accepted and rejected applications admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Only pending or reviewed applications can be accepted or rejected.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Pending | Self::Reviewed)
    }
}

/// Badge styling for an application status. Total over all statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub text: &'static str,
    pub badge_class: &'static str,
}

/// Resolve the badge shown next to an application's status.
pub fn status_display(status: &ApplicationStatus) -> StatusDisplay {
    match status {
        ApplicationStatus::Pending => StatusDisplay {
            text: "Pending",
            badge_class: "bg-yellow-100 text-yellow-800",
        },
        ApplicationStatus::Reviewed => StatusDisplay {
            text: "Reviewed",
            badge_class: "bg-blue-100 text-blue-800",
        },
        ApplicationStatus::Accepted => StatusDisplay {
            text: "Accepted",
            badge_class: "bg-green-100 text-green-800",
        },
        ApplicationStatus::Rejected => StatusDisplay {
            text: "Rejected",
            badge_class: "bg-red-100 text-red-800",
        },
        ApplicationStatus::Unrecognised(_) => StatusDisplay {
            text: "Unknown",
            badge_class: "bg-gray-100 text-gray-800",
        },
    }
}

/// A submitted application as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub cv_url: Option<String>,
    pub cv_file_name: Option<String>,
    pub cover_letter: Option<String>,
    pub submitted_on: NaiveDate,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub user_id: Option<i64>,
}

impl Application {
    /// Whether this application belongs to the given user.
    pub fn belongs_to(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Validated payload for a new application submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: i64,
    pub user_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub cover_letter: String,
}

/// Why an apply form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationFormError {
    MissingFields,
    CoverLetterTooShort,
}

impl fmt::Display for ApplicationFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "required application fields are blank"),
            Self::CoverLetterTooShort => {
                write!(f, "cover letter is under {MIN_COVER_LETTER_CHARS} characters")
            }
        }
    }
}

impl std::error::Error for ApplicationFormError {}

impl ApplicationFormError {
    /// Symbolic code carried on the redirect back to the apply form.
    pub fn redirect_code(self) -> &'static str {
        match self {
            Self::MissingFields => "missing-fields",
            Self::CoverLetterTooShort => "validation-failed",
        }
    }
}

/// Validate the apply form fields. Length is counted after trimming.
pub fn validate_submission(
    applicant_name: &str,
    email: &str,
    cover_letter: &str,
) -> Result<(), ApplicationFormError> {
    if applicant_name.trim().is_empty() || email.trim().is_empty() || cover_letter.trim().is_empty()
    {
        return Err(ApplicationFormError::MissingFields);
    }
    if cover_letter.trim().chars().count() < MIN_COVER_LETTER_CHARS {
        return Err(ApplicationFormError::CoverLetterTooShort);
    }
    Ok(())
}

/// A reviewer's verdict on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject,
}

impl ReviewDecision {
    /// Notes recorded when the reviewer leaves the field blank.
    pub fn default_notes(self) -> &'static str {
        match self {
            Self::Accept => "Application accepted by reviewer",
            Self::Reject => "Application rejected by reviewer",
        }
    }

    /// Symbolic code carried on the post-review redirect.
    pub fn success_code(self) -> &'static str {
        match self {
            Self::Accept => "accepted",
            Self::Reject => "rejected",
        }
    }
}

/// What the review page offers for a given status and viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewActions {
    /// Accept/reject buttons are shown.
    pub can_review: bool,
    /// The recorded outcome and notes are shown instead.
    pub show_details: bool,
}

///// Review affordances: admins may act on non-terminal applications only.
pub fn review_actions(status: &ApplicationStatus, viewer: &Viewer) -> ReviewActions {
    let can_review = viewer.is_admin() && status.is_reviewable();
    ReviewActions {
        can_review,
        show_details: status.is_terminal(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::user::tests::{admin, member};
    use rstest::rstest;

    pub(crate) fn pending_application(id: i64, job_id: i64, user_id: i64) -> Application {
        Application {
            id,
            job_id,
            applicant_name: "Jo Bloggs".to_owned(),
            email: "jo@example.com".to_owned(),
            phone_number: Some("07700 900123".to_owned()),
            cv_url: Some("/uploads/cvs/2026/03/jo-cv.pdf".to_owned()),
            cv_file_name: Some("jo-cv.pdf".to_owned()),
            cover_letter: Some("I am keen on this role and bring years of experience.".to_owned()),
            submitted_on: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
            status: ApplicationStatus::Pending,
            notes: None,
            user_id: Some(user_id),
        }
    }

    #[rstest]
    #[case("in progress", ApplicationStatus::Pending)]
    #[case("pending", ApplicationStatus::Pending)]
    #[case("Reviewed", ApplicationStatus::Reviewed)]
    #[case("hired", ApplicationStatus::Accepted)]
    #[case("accepted", ApplicationStatus::Accepted)]
    #[case("rejected", ApplicationStatus::Rejected)]
    #[case("escalated", ApplicationStatus::Unrecognised("escalated".to_owned()))]
    fn maps_backend_statuses(#[case] raw: &str, #[case] expected: ApplicationStatus) {
        assert_eq!(ApplicationStatus::from_backend(raw), expected);
    }

    #[test]
    fn terminal_and_reviewable_partition_known_statuses() {
        assert!(ApplicationStatus::Pending.is_reviewable());
        assert!(ApplicationStatus::Reviewed.is_reviewable());
        assert!(ApplicationStatus::Accepted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        let odd = ApplicationStatus::Unrecognised("escalated".to_owned());
        assert!(!odd.is_terminal());
        assert!(!odd.is_reviewable());
    }

    #[test]
    fn unknown_statuses_display_as_unknown() {
        let odd = ApplicationStatus::Unrecognised("escalated".to_owned());
        assert_eq!(status_display(&odd).text, "Unknown");
        assert_eq!(status_display(&ApplicationStatus::Pending).text, "Pending");
    }

    #[rstest]
    #[case("", "jo@example.com", "x".repeat(60), ApplicationFormError::MissingFields)]
    #[case("Jo", "", "x".repeat(60), ApplicationFormError::MissingFields)]
    #[case("Jo", "jo@example.com", String::new(), ApplicationFormError::MissingFields)]
    #[case("Jo", "jo@example.com", "too short".to_owned(), ApplicationFormError::CoverLetterTooShort)]
    fn rejects_invalid_submissions(
        #[case] name: &str,
        #[case] email: &str,
        #[case] cover_letter: String,
        #[case] expected: ApplicationFormError,
    ) {
        let error = validate_submission(name, email, &cover_letter).expect_err("should fail");
        assert_eq!(error, expected);
    }

    #[test]
    fn accepts_a_valid_submission() {
        let cover_letter = "I am writing to express a strong interest in this position.";
        assert!(validate_submission("Jo", "jo@example.com", cover_letter).is_ok());
    }

    #[test]
    fn review_decisions_carry_defaults_and_codes() {
        assert_eq!(
            ReviewDecision::Accept.default_notes(),
            "Application accepted by reviewer"
        );
        assert_eq!(ReviewDecision::Reject.success_code(), "rejected");
    }

    #[rstest]
    #[case(ApplicationStatus::Pending, true, false)]
    #[case(ApplicationStatus::Reviewed, true, false)]
    #[case(ApplicationStatus::Accepted, false, true)]
    #[case(ApplicationStatus::Rejected, false, true)]
    #[case(ApplicationStatus::Unrecognised("escalated".to_owned()), false, false)]
    fn admins_review_only_non_terminal_applications(
        #[case] status: ApplicationStatus,
        #[case] can_review: bool,
        #[case] show_details: bool,
    ) {
        let actions = review_actions(&status, &Viewer::Admin(admin()));
        assert_eq!(actions.can_review, can_review);
        assert_eq!(actions.show_details, show_details);
    }

    #[test]
    fn members_never_get_review_buttons() {
        let actions = review_actions(&ApplicationStatus::Pending, &Viewer::Member(member()));
        assert!(!actions.can_review);
    }

    #[test]
    fn ownership_check_requires_a_matching_user_id() {
        let application = pending_application(1, 5, 7);
        assert!(application.belongs_to(7));
        assert!(!application.belongs_to(8));
        let orphan = Application {
            user_id: None,
            ..application
        };
        assert!(!orphan.belongs_to(7));
    }
}
