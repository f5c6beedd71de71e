//! Application state shared by every screen.
//!
//! One [`AppState`] value is owned by the provider. Each command runs against
//! a copy and the result is committed back, unless a sign-out landed while the
//! command was in flight. Screens only read it.

use api::{Questionnaire, UserProfile};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Auth,
    Consent,
    Dashboard,
    Screening(Questionnaire),
}

/// Who is signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// True until the stored token has been checked at startup.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl Session {
    /// The logged-out session.
    pub fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }
}

/// A modal message. At most one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub session: Session,
    pub screen: Screen,
    pub alert: Option<Alert>,
    /// Bumped on every sign-out. A command result computed under an older
    /// epoch belongs to a session that no longer exists.
    pub epoch: u64,
}

impl AppState {
    /// Show an alert, replacing any visible one.
    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Replace this state with `next`, computed from a copy taken at epoch
    /// `started`. Returns false and keeps the current state if a sign-out
    /// happened in between.
    pub fn commit(&mut self, started: u64, next: AppState) -> bool {
        if self.epoch != started {
            tracing::debug!(
                started,
                current = self.epoch,
                "Discarding result from a signed-out session"
            );
            return false;
        }
        *self = next;
        true
    }
}
