//! Authentication session and navigation routes.
//!
//! The session is an explicit value passed to whatever renders screens, not
//! ambient global state. It moves `LoggedOut -> LoggedIn -> LoggedOut`
//! through [`Session::login`] and [`Session::logout`] only.
//!
//! Authentication is a stub: any non-blank username and password pair is
//! accepted.
//!
//! ```
//! use secrecy::SecretString;
//! use vitrine_core::session::{Credentials, Route, Session};
//!
//! let session = Session::default();
//! assert_eq!(session.landing_route(), Route::Login);
//!
//! let credentials = Credentials::new("maria", SecretString::from("hunter2".to_owned()));
//! let session = session.login(&credentials).unwrap();
//! assert!(session.is_authenticated());
//!
//! let (session, route) = session.logout();
//! assert_eq!(route, Route::Login);
//! assert!(!session.is_authenticated());
//! ```

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::DEFAULT_CATEGORY;
use crate::types::ProductId;

// =============================================================================
// Username
// =============================================================================

/// Errors that can occur when parsing a [`Username`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input is empty or only whitespace.
    #[error("username cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A signed-in user's name, trimmed and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a username, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// Login form input.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: SecretString,
}

impl Credentials {
    /// Bundle a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Session
// =============================================================================

/// Errors from session transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Username failed validation.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),
    /// Password was blank.
    #[error("password cannot be empty")]
    EmptyPassword,
    /// A user is already signed in; log out first.
    #[error("already logged in as {0}")]
    AlreadyLoggedIn(Username),
}

/// Authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    /// No user signed in.
    #[default]
    LoggedOut,
    /// A user is signed in.
    LoggedIn {
        /// The signed-in user.
        user: Username,
    },
}

impl Session {
    /// Sign in.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyLoggedIn`] if a user is already signed in.
    /// - [`SessionError::InvalidUsername`] / [`SessionError::EmptyPassword`]
    ///   for blank credentials.
    pub fn login(&self, credentials: &Credentials) -> Result<Self, SessionError> {
        if let Self::LoggedIn { user } = self {
            return Err(SessionError::AlreadyLoggedIn(user.clone()));
        }
        let user = Username::parse(&credentials.username)?;
        if credentials.password.expose_secret().trim().is_empty() {
            return Err(SessionError::EmptyPassword);
        }
        Ok(Self::LoggedIn { user })
    }

    /// Sign out.
    ///
    /// Idempotent: logging out of a logged-out session is not an error. The
    /// returned route is always [`Route::Login`], the only place to go after
    /// signing out.
    #[must_use]
    pub const fn logout(&self) -> (Self, Route) {
        (Self::LoggedOut, Route::Login)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&Username> {
        match self {
            Self::LoggedIn { user } => Some(user),
            Self::LoggedOut => None,
        }
    }

    /// First screen to show for this session.
    #[must_use]
    pub fn landing_route(&self) -> Route {
        self.guard(Route::default_product_list())
    }

    /// Resolve a navigation request.
    ///
    /// Authenticated sessions may go anywhere. Everything else is sent to
    /// [`Route::Login`]; there is no other fallback.
    #[must_use]
    pub fn guard(&self, route: Route) -> Route {
        if self.is_authenticated() || route == Route::Login {
            route
        } else {
            Route::Login
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Screens of the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    /// Login form.
    Login,
    /// Product list filtered by category slug.
    ProductList {
        /// Category slug.
        category: String,
    },
    /// Product detail.
    ProductDetail {
        /// Product to show.
        id: ProductId,
    },
}

impl Route {
    /// Product list for the default category.
    #[must_use]
    pub fn default_product_list() -> Self {
        Self::ProductList {
            category: DEFAULT_CATEGORY.slug.to_owned(),
        }
    }

    /// Path of this screen, in file-based routing form.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/".to_owned(),
            Self::ProductList { category } => format!("/home?category={category}"),
            Self::ProductDetail { id } => format!("/product/{id}"),
        }
    }

    /// Resolve a path in the form produced by [`Route::path`].
    ///
    /// `/home` without a category opens the default category. Unknown paths
    /// and malformed product IDs give `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => return Some(Self::Login),
            "/home" => return Some(Self::default_product_list()),
            _ => {}
        }
        if let Some(id) = path.strip_prefix("/product/") {
            return id.parse().ok().map(|id| Self::ProductDetail { id });
        }
        let category = path.strip_prefix("/home?category=")?;
        (!category.is_empty()).then(|| Self::ProductList {
            category: category.to_owned(),
        })
    }
}
