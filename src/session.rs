//! # Session state machine
//!
//! The current identity plus the active screen, with every transition a
//! pure function `(session, action) → session`. Screens are gated by role:
//! the auth screens are only reachable logged out, the ordering screens only
//! as a customer, the dashboard only as admin. An illegal navigation leaves
//! the state unchanged.
//!
//! Authentication is the mock check carried over from the source system:
//! the admin sentinel pair yields the fixed admin identity, any other
//! non-empty credentials log in as a fresh customer — a deliberate
//! simplification kept behind [`login`] so a real authenticator could
//! replace it.

use crate::model::{Role, User};
use thiserror::Error;
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";
const ADMIN_DISPLAY_NAME: &str = "Quản trị viên";

/// The screens of the point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Menu,
    Cart,
    OrderSuccess,
    Dashboard,
}

/// Errors from the credential presence check.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
}

/// Identity + screen. Created at login, destroyed at logout, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Option<User>,
    screen: Screen,
}

/// A user action against the session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    LogIn(User),
    LogOut,
    Go(Screen),
}

impl Session {
    /// The logged-out state on the login screen.
    pub fn new() -> Self {
        Self {
            user: None,
            screen: Screen::Login,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Pure transition. Logging in lands on the role's home screen,
    /// logging out resets everything, and navigation only happens when the
    /// current role allows the target screen.
    pub fn apply(self, action: SessionAction) -> Session {
        match action {
            SessionAction::LogIn(user) => {
                let screen = match user.role {
                    Role::Admin => Screen::Dashboard,
                    Role::Customer => Screen::Menu,
                };
                Session {
                    user: Some(user),
                    screen,
                }
            }
            SessionAction::LogOut => Session::new(),
            SessionAction::Go(screen) => {
                if self.allows(screen) {
                    Session { screen, ..self }
                } else {
                    self
                }
            }
        }
    }

    fn allows(&self, screen: Screen) -> bool {
        matches!(
            (self.role(), screen),
            (None, Screen::Login | Screen::Register)
                | (
                    Some(Role::Customer),
                    Screen::Menu | Screen::Cart | Screen::OrderSuccess
                )
                | (Some(Role::Admin), Screen::Dashboard)
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock credential check: presence only. The admin sentinel (username
/// case-insensitive) yields the fixed admin identity; anything else yields
/// a fresh customer identity named after the supplied username.
pub fn login(username: &str, password: &str) -> Result<User, AuthError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if username.eq_ignore_ascii_case(ADMIN_USERNAME) && password == ADMIN_PASSWORD {
        return Ok(User {
            id: "admin".to_string(),
            username: ADMIN_DISPLAY_NAME.to_string(),
            role: Role::Admin,
        });
    }
    Ok(User {
        id: Uuid::new_v4().to_string(),
        username: username.to_string(),
        role: Role::Customer,
    })
}
