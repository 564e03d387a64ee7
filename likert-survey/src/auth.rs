//! Local sign-in gate.
//!
//! There is no identity provider behind this: a mobile number of at least ten
//! digits moves the session to the code step, and any code of at least four
//! digits signs the user in. Signing up needs a name, an email, and a valid
//! mobile number.

use tracing::info;

/// Minimum number of digits in a mobile number.
pub const MIN_MOBILE_DIGITS: usize = 10;

/// Minimum number of digits in a one-time code.
pub const MIN_CODE_DIGITS: usize = 4;

/// Error type for the sign-in gate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Name must not be empty")]
    InvalidName,

    #[error("Email must not be empty")]
    InvalidEmail,

    #[error("Mobile number must have at least 10 digits")]
    InvalidMobile,

    #[error("Code must have at least 4 digits")]
    InvalidCode,

    #[error("No mobile number has been entered yet")]
    NoPendingMobile,

    #[error("Already signed in; sign out first")]
    AlreadySignedIn,
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: String,
}

impl User {
    /// A newly registered user.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            id: "1".to_string(),
            name: Some(name.into()),
            email: Some(email.into()),
            mobile: mobile.into(),
        }
    }

    /// A user known only by mobile number.
    pub fn with_mobile(mobile: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            name: None,
            email: None,
            mobile: mobile.into(),
        }
    }
}

/// Where the sign-in flow currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStep {
    /// Waiting for a mobile number.
    #[default]
    Mobile,
    /// Mobile accepted; waiting for the code.
    Code { mobile: String },
    /// Signed in.
    SignedIn(User),
}

/// The sign-in state of one app session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    step: AuthStep,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current step.
    pub fn step(&self) -> &AuthStep {
        &self.step
    }

    /// Get the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.step {
            AuthStep::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Accept a mobile number and move to the code step.
    ///
    /// A signed-in session has to [`logout`](Self::logout) first.
    pub fn request_code(&mut self, mobile: &str) -> Result<(), AuthError> {
        if self.is_authenticated() {
            return Err(AuthError::AlreadySignedIn);
        }
        let mobile = mobile.trim();
        if !is_digits(mobile, MIN_MOBILE_DIGITS) {
            return Err(AuthError::InvalidMobile);
        }
        self.step = AuthStep::Code {
            mobile: mobile.to_string(),
        };
        Ok(())
    }

    /// Drop the pending mobile number and go back to the mobile step.
    ///
    /// Does nothing unless the session is waiting for a code.
    pub fn cancel_code(&mut self) {
        if matches!(self.step, AuthStep::Code { .. }) {
            self.step = AuthStep::Mobile;
        }
    }

    /// Accept a code for the pending mobile number and sign in.
    pub fn login(&mut self, code: &str) -> Result<(), AuthError> {
        let AuthStep::Code { mobile } = &self.step else {
            return Err(AuthError::NoPendingMobile);
        };
        if !is_digits(code.trim(), MIN_CODE_DIGITS) {
            return Err(AuthError::InvalidCode);
        }
        let user = User::with_mobile(mobile.clone());
        info!(mobile = %user.mobile, "signed in");
        self.step = AuthStep::SignedIn(user);
        Ok(())
    }

    /// Register a user and sign them in directly.
    ///
    /// Name and email must be non-blank and the mobile number must pass the
    /// same check as [`request_code`](Self::request_code). Surrounding
    /// whitespace is trimmed off all three.
    pub fn signup(&mut self, user: User) -> Result<(), AuthError> {
        if self.is_authenticated() {
            return Err(AuthError::AlreadySignedIn);
        }
        let name = trimmed(user.name.as_deref()).ok_or(AuthError::InvalidName)?;
        let email = trimmed(user.email.as_deref()).ok_or(AuthError::InvalidEmail)?;
        let mobile = user.mobile.trim();
        if !is_digits(mobile, MIN_MOBILE_DIGITS) {
            return Err(AuthError::InvalidMobile);
        }

        let user = User {
            id: user.id,
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            mobile: mobile.to_string(),
        };
        info!(mobile = %user.mobile, "signed up");
        self.step = AuthStep::SignedIn(user);
        Ok(())
    }

    /// Sign out and start over at the mobile step.
    pub fn logout(&mut self) {
        if self.is_authenticated() {
            info!("signed out");
        }
        self.step = AuthStep::Mobile;
    }
}

fn is_digits(s: &str, min: usize) -> bool {
    s.len() >= min && s.chars().all(|c| c.is_ascii_digit())
}

fn trimmed(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
