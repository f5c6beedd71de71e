//! # API crate: typed client for the MindCheck check-in service
//!
//! Every screen in the app ends in a call to the remote REST API. This crate
//! owns those calls and the payloads they carry, so the UI never touches raw
//! JSON or status codes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per endpoint, bearer auth, error normalization |
//! | [`error`] | [`ApiError`] (transport / server / decode) and [`ValidationError`] (rejected before sending) |
//! | [`models`] | Account and mood payloads, signup form validation |
//! | [`questionnaire`] | PHQ-9 and GAD-7 item text, [`ResponseSheet`] with its completeness check |
//!
//! ## The [`Backend`] seam
//!
//! The UI controller is generic over [`Backend`] rather than tied to
//! [`ApiClient`], so the screen state machine can be driven against an
//! in-process fake. Authenticated operations take the bearer token explicitly;
//! the client never stores it.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;
pub mod questionnaire;

pub use client::ApiClient;
pub use error::{ApiError, ValidationError, GENERIC_ERROR};
pub use models::{
    ConsentUpdate, Credentials, MoodEntry, MoodRecord, NewUser, SignupForm, TokenResponse,
    UserProfile,
};
pub use questionnaire::{
    Questionnaire, ResponseSheet, ScreeningResult, ScreeningSubmission, ANSWER_OPTIONS,
};

pub use store::{AppConfig, LoginRoute};

/// Async interface to the server, one method per endpoint.
pub trait Backend {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;
    fn signup(&self, user: &NewUser) -> impl Future<Output = Result<UserProfile, ApiError>>;
    fn fetch_profile(&self, token: &str) -> impl Future<Output = Result<UserProfile, ApiError>>;
    fn give_consent(&self, token: &str) -> impl Future<Output = Result<UserProfile, ApiError>>;
    fn log_mood(
        &self,
        token: &str,
        entry: &MoodEntry,
    ) -> impl Future<Output = Result<MoodRecord, ApiError>>;
    fn submit_screening(
        &self,
        token: &str,
        submission: &ScreeningSubmission,
    ) -> impl Future<Output = Result<ScreeningResult, ApiError>>;
}
