//! Session state machine
//!
//! A session is either logged out or logged in with a mode and an acting
//! user. The user only exists inside the logged-in states, so "mode and user
//! are set iff logged in" holds by construction.

use crate::types::FrontEndError;
use std::fmt;
use std::str::FromStr;

/// Privilege level of a logged-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standard,
    Admin,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Admin => "admin",
        }
    }
}

impl FromStr for Mode {
    type Err = FrontEndError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Mode::Standard),
            "admin" => Ok(Mode::Admin),
            _ => Err(FrontEndError::invalid_mode(s.trim())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of the terminal session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    Standard { user: String },
    Admin { user: String },
}

impl Session {
    /// Create a logged-out session
    pub fn new() -> Self {
        Session::LoggedOut
    }

    /// Start a session
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLoggedIn` (and leaves the state untouched) if a session
    /// is already active.
    pub fn login(&mut self, mode: Mode, user: impl Into<String>) -> Result<(), FrontEndError> {
        if self.is_logged_in() {
            return Err(FrontEndError::AlreadyLoggedIn);
        }
        let user = user.into();
        *self = match mode {
            Mode::Standard => Session::Standard { user },
            Mode::Admin => Session::Admin { user },
        };
        Ok(())
    }

    /// End the session, discarding the user
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` if there is no active session.
    pub fn logout(&mut self) -> Result<(), FrontEndError> {
        if !self.is_logged_in() {
            return Err(FrontEndError::NotLoggedIn);
        }
        *self = Session::LoggedOut;
        Ok(())
    }

    /// Check that the session may run a command, without changing it
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` if logged out
    /// - `InsufficientPrivilege` if `admin_required` and the session is standard
    pub fn require_login(&self, admin_required: bool, command: &str) -> Result<Mode, FrontEndError> {
        match self.mode() {
            None => Err(FrontEndError::NotLoggedIn),
            Some(Mode::Standard) if admin_required => {
                Err(FrontEndError::insufficient_privilege(command))
            }
            Some(mode) => Ok(mode),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Session::LoggedOut)
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Session::LoggedOut => None,
            Session::Standard { .. } => Some(Mode::Standard),
            Session::Admin { .. } => Some(Mode::Admin),
        }
    }

    pub fn user(&self) -> Option<&str> {
        match self {
            Session::LoggedOut => None,
            Session::Standard { user } | Session::Admin { user } => Some(user),
        }
    }
}
