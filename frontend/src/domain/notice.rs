//! Symbolic notice codes and their user-facing presentation.
//!
//! Redirects carry short codes (`?error=not-found`, `?success=created`)
//! instead of free text; this module is the single place those codes turn
//! into messages and styling. Both mappers are total: an unknown code falls
//! back to a generic message rather than rendering nothing.

use serde::Serialize;

/// How prominent an error notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    fn icon_class(self) -> &'static str {
        match self {
            Self::Error => "alert-circle",
            Self::Warning => "alert-triangle",
            Self::Info => "info",
        }
    }

    fn container_class(self) -> &'static str {
        match self {
            Self::Error => "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-6",
            Self::Warning => {
                "bg-yellow-50 border border-yellow-200 text-yellow-700 px-4 py-3 rounded mb-6"
            }
            Self::Info => "bg-blue-50 border border-blue-200 text-blue-700 px-4 py-3 rounded mb-6",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            Self::Error => "text-red-700",
            Self::Warning => "text-yellow-700",
            Self::Info => "text-blue-700",
        }
    }
}

/// A renderable error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    pub show: bool,
    pub message: &'static str,
    pub severity: Severity,
    pub icon_class: &'static str,
    pub container_class: &'static str,
    pub text_class: &'static str,
}

impl ErrorNotice {
    const HIDDEN: Self = Self {
        show: false,
        message: "",
        severity: Severity::Error,
        icon_class: "",
        container_class: "",
        text_class: "",
    };

    /// Resolve an optional `?error=` code into a banner. Absent code means
    /// no banner; unknown code gets the generic message.
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.filter(|c| !c.is_empty()) else {
            return Self::HIDDEN;
        };
        let (message, severity) = match code {
            "unauthorized" => ("Please log in to access this page.", Severity::Error),
            "invalid-credentials" => {
                ("Invalid email or password. Please try again.", Severity::Error)
            }
            "session-expired" => {
                ("Your session has expired. Please log in again.", Severity::Warning)
            }
            "login-failed" => ("Login failed. Please try again.", Severity::Error),
            "invalid-id" => ("Invalid job ID provided.", Severity::Error),
            "not-found" => (
                "The job you're looking for doesn't exist or has been removed.",
                Severity::Error,
            ),
            "not-available" => (
                "This job is no longer available for applications.",
                Severity::Warning,
            ),
            "missing-fields" => ("Please fill in all required fields.", Severity::Error),
            "missing-cv-file" => ("Please upload your CV file.", Severity::Error),
            "invalid-file-type" => (
                "Please upload a CV in PDF, DOC, or DOCX format only.",
                Severity::Error,
            ),
            "file-too-large" => (
                "CV file is too large. Please upload a file smaller than 5MB.",
                Severity::Error,
            ),
            "submission-failed" => {
                ("Failed to submit application. Please try again.", Severity::Error)
            }
            "already-applied" => (
                "You have already applied for this job. You cannot apply for the same job twice.",
                Severity::Warning,
            ),
            "file-upload-failed" => (
                "Failed to upload file. Please try again with a different file.",
                Severity::Error,
            ),
            "invalid-email" => ("Please enter a valid email address.", Severity::Error),
            "password-mismatch" => ("Passwords do not match.", Severity::Error),
            "weak-password" => (
                "Password must be at least 8 characters with uppercase, lowercase, and number.",
                Severity::Error,
            ),
            "registration-failed" => ("Registration failed. Please try again.", Severity::Error),
            "server-error" => (
                "An unexpected error occurred. Please try again later.",
                Severity::Error,
            ),
            "validation-failed" => ("Please check your input and try again.", Severity::Error),
            "update-failed" => ("Failed to update. Please try again.", Severity::Error),
            "delete-failed" => ("Failed to delete. Please try again.", Severity::Error),
            _ => ("An error occurred. Please try again.", Severity::Error),
        };
        Self {
            show: true,
            message,
            severity,
            icon_class: severity.icon_class(),
            container_class: severity.container_class(),
            text_class: severity.text_class(),
        }
    }
}

/// A renderable success banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessNotice {
    pub show: bool,
    pub message: &'static str,
    pub icon_class: &'static str,
    pub container_class: &'static str,
    pub text_class: &'static str,
}

impl SuccessNotice {
    const HIDDEN: Self = Self {
        show: false,
        message: "",
        icon_class: "",
        container_class: "",
        text_class: "",
    };

    /// Resolve an optional `?success=` code into a banner.
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.filter(|c| !c.is_empty()) else {
            return Self::HIDDEN;
        };
        let message = match code {
            "created" => "Job role created successfully!",
            "updated" => "Updated successfully!",
            "deleted" => "Deleted successfully!",
            "submitted" => "Application submitted successfully!",
            "accepted" => "Application accepted successfully!",
            "rejected" => "Application rejected.",
            "login" => "Login successful!",
            "logout" => "Logged out successfully!",
            "registration" => "Welcome! Your account has been created successfully!",
            _ => "Operation completed successfully!",
        };
        Self {
            show: true,
            message,
            icon_class: "check-circle",
            container_class: "bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-6",
            text_class: "text-green-700",
        }
    }
}
