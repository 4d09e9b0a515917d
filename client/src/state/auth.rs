//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login dialog, the logout button and the startup user
//! check; read by the header, the admin route and any view that changes
//! behaviour when signed in. The token itself lives in `Session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use catalog::User;

/// Signed-in user, if any, and whether the startup check is still running.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}
