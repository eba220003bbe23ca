//! User identity and the viewer classification used by authorization rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyDisplayName,
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// The two roles the portal recognises. No other role grants elevated access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Member => f.write_str("member"),
        }
    }
}

/// Authenticated portal user.
///
/// The front-end never persists users; a transient copy lives in the session
/// cookie for the lifetime of the browser session.
///
/// ## Invariants
/// - `display_name` and `email` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: i64,
    display_name: String,
    email: String,
    role: Role,
}

impl User {
    /// Fallible constructor enforcing the non-empty field invariants.
    pub fn new(
        id: i64,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self {
            id,
            display_name,
            email,
            role,
        })
    }

    /// Numeric identifier assigned by the backend auth service.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name shown in the page header.
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Email address the user authenticated with.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Portal role.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: i64,
    display_name: String,
    email: String,
    role: Role,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            display_name,
            email,
            role,
        } = value;
        Self {
            id,
            display_name,
            email,
            role,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::new(value.id, value.display_name, value.email, value.role)
    }
}

/// The requester's resolved identity for authorization decisions.
///
/// A closed union so that action-resolution code pattern-matches
/// exhaustively instead of chaining optional-field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Member(User),
    Admin(User),
}

impl Viewer {
    /// Classify an optional session user into a viewer.
    pub fn from_user(user: Option<User>) -> Self {
        match user {
            None => Self::Anonymous,
            Some(user) if user.is_admin() => Self::Admin(user),
            Some(user) => Self::Member(user),
        }
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Member(user) | Self::Admin(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }
}
