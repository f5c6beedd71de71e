//! # Controller: the screen state machine
//!
//! Screens never call the API directly. They send a [`Command`] and the
//! [`Controller`] performs the request, persists or clears the token, moves
//! between screens, and fills the alert slot. The controller is plain async
//! Rust over a [`Backend`] and a [`KeyValueStore`], so the whole transition
//! table can be exercised without rendering anything.
//!
//! ## Transitions
//!
//! | From | Command | Success | Failure |
//! |------|---------|---------|---------|
//! | startup | [`Bootstrap`](Command::Bootstrap) | consent / dashboard, per profile | auth, token discarded |
//! | auth | [`SignIn`](Command::SignIn) / [`SignUp`](Command::SignUp) | consent / dashboard, per profile | auth + alert |
//! | consent | [`GiveConsent`](Command::GiveConsent) | dashboard | consent + alert |
//! | dashboard | [`OpenScreening`](Command::OpenScreening) | screening | |
//! | screening | [`SubmitScreening`](Command::SubmitScreening) | dashboard + result alert | screening + alert |
//! | screening | [`CloseScreening`](Command::CloseScreening) | dashboard | |
//! | any | [`SignOut`](Command::SignOut) | auth, token cleared | |
//!
//! A session restored from storage whose profile fetch fails is signed out
//! without an alert; the stored token is assumed to be stale.

use api::{Backend, Credentials, MoodEntry, Questionnaire, ResponseSheet, SignupForm};
use store::{KeyValueStore, TokenStore};

use crate::state::{AppState, Screen, Session};

pub const SCREENING_DISCLAIMER: &str =
    "Please note: This is a screening tool, not a diagnosis. Consult a healthcare professional for advice.";

/// An action requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Restore a stored session at startup.
    Bootstrap,
    SignIn(Credentials),
    SignUp(SignupForm),
    GiveConsent,
    /// Log today's mood; `choice` is the zero-based face index.
    LogMood { choice: usize, notes: String },
    OpenScreening(Questionnaire),
    SubmitScreening(ResponseSheet),
    CloseScreening,
    SignOut,
    DismissAlert,
}

/// Whether a command took effect. Screens use this to reset local input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Shared home of the live [`AppState`] that commands are dispatched against.
pub trait StateSlot {
    fn snapshot(&self) -> AppState;
    /// Commit `next` unless the session changed since `started`.
    fn publish(&self, started: u64, next: AppState) -> bool;
}

#[derive(Clone, Debug)]
pub struct Controller<B, S> {
    backend: B,
    tokens: TokenStore<S>,
}

impl<B: Backend, S: KeyValueStore> Controller<B, S> {
    pub fn new(backend: B, tokens: TokenStore<S>) -> Self {
        Self { backend, tokens }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Apply a command to `state`.
    pub async fn handle(&self, state: &mut AppState, command: Command) -> Outcome {
        match command {
            Command::Bootstrap => self.bootstrap(state).await,
            Command::SignIn(credentials) => self.sign_in(state, &credentials).await,
            Command::SignUp(form) => self.sign_up(state, form).await,
            Command::GiveConsent => self.give_consent(state).await,
            Command::LogMood { choice, notes } => self.log_mood(state, choice, notes).await,
            Command::OpenScreening(questionnaire) => open_screening(state, questionnaire),
            Command::SubmitScreening(sheet) => self.submit_screening(state, &sheet).await,
            Command::CloseScreening => close_screening(state),
            Command::SignOut => {
                self.sign_out(state);
                Outcome::Applied
            }
            Command::DismissAlert => {
                state.dismiss_alert();
                Outcome::Applied
            }
        }
    }

    /// Run `command` against a copy of the slot's state and publish the
    /// result. Other commands may run while this one awaits the network; a
    /// result that outlived its session is dropped and reported as rejected.
    pub async fn dispatch(&self, slot: &impl StateSlot, command: Command) -> Outcome {
        let mut next = slot.snapshot();
        let started = next.epoch;
        let outcome = self.handle(&mut next, command).await;
        if slot.publish(started, next) {
            outcome
        } else {
            Outcome::Rejected
        }
    }

    async fn bootstrap(&self, state: &mut AppState) -> Outcome {
        let Some(token) = self.tokens.get() else {
            tracing::info!("No stored session");
            state.session = Session::signed_out();
            state.screen = Screen::Auth;
            return Outcome::Applied;
        };

        state.session.token = Some(token.clone());
        self.load_profile(state, &token).await
    }

    /// Fetch the profile for `token` and route to consent or dashboard.
    /// Any failure signs the session out.
    async fn load_profile(&self, state: &mut AppState, token: &str) -> Outcome {
        match self.backend.fetch_profile(token).await {
            Ok(user) => {
                state.screen = if user.consent_given {
                    Screen::Dashboard
                } else {
                    Screen::Consent
                };
                tracing::info!(screen = ?state.screen, "Session established");
                state.session = Session {
                    token: Some(token.to_string()),
                    user: Some(user),
                    loading: false,
                };
                Outcome::Applied
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Session token rejected, signing out");
                self.sign_out(state);
                Outcome::Rejected
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch user data, signing out");
                self.sign_out(state);
                Outcome::Rejected
            }
        }
    }

    async fn sign_in(&self, state: &mut AppState, credentials: &Credentials) -> Outcome {
        match self.backend.login(credentials).await {
            Ok(response) => {
                self.tokens.set(&response.access_token);
                state.session.token = Some(response.access_token.clone());
                self.load_profile(state, &response.access_token).await
            }
            Err(e) => {
                state.show_alert("Login Failed", e.user_message());
                Outcome::Rejected
            }
        }
    }

    async fn sign_up(&self, state: &mut AppState, form: SignupForm) -> Outcome {
        let user = match form.into_new_user() {
            Ok(user) => user,
            Err(e) => {
                state.show_alert("Sign-up Failed", e.to_string());
                return Outcome::Rejected;
            }
        };

        if let Err(e) = self.backend.signup(&user).await {
            state.show_alert("Sign-up Failed", e.user_message());
            return Outcome::Rejected;
        }

        tracing::info!("Account created, signing in");
        self.sign_in(state, &user.credentials()).await
    }

    async fn give_consent(&self, state: &mut AppState) -> Outcome {
        let Some(token) = state.session.token.clone() else {
            self.sign_out(state);
            return Outcome::Rejected;
        };

        match self.backend.give_consent(&token).await {
            Ok(user) => {
                state.session.user = Some(user);
                state.screen = Screen::Dashboard;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving consent failed");
                state.show_alert("Error", "Could not save your consent. Please try again.");
                Outcome::Rejected
            }
        }
    }

    async fn log_mood(&self, state: &mut AppState, choice: usize, notes: String) -> Outcome {
        let Some(token) = state.session.token.clone() else {
            self.sign_out(state);
            return Outcome::Rejected;
        };

        let entry = match MoodEntry::for_today(choice, notes) {
            Ok(entry) => entry,
            Err(e) => {
                state.show_alert("Error", e.to_string());
                return Outcome::Rejected;
            }
        };

        match self.backend.log_mood(&token, &entry).await {
            Ok(_) => {
                state.show_alert("Success", "Your mood has been logged!");
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logging mood failed");
                state.show_alert("Error", "Could not save your mood. Please try again.");
                Outcome::Rejected
            }
        }
    }

    async fn submit_screening(&self, state: &mut AppState, sheet: &ResponseSheet) -> Outcome {
        let submission = match sheet.submission() {
            Ok(submission) => submission,
            Err(e) => {
                state.show_alert("Incomplete", e.to_string());
                return Outcome::Rejected;
            }
        };

        let Some(token) = state.session.token.clone() else {
            self.sign_out(state);
            return Outcome::Rejected;
        };

        match self.backend.submit_screening(&token, &submission).await {
            Ok(result) => {
                state.show_alert(
                    "Screening Complete",
                    format!(
                        "Your Score: {}\nSeverity: {}\n\n{}",
                        result.score, result.severity, SCREENING_DISCLAIMER
                    ),
                );
                state.screen = Screen::Dashboard;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Submitting screening failed");
                state.show_alert("Error", "Could not save your screening results. Please try again.");
                Outcome::Rejected
            }
        }
    }

    fn sign_out(&self, state: &mut AppState) {
        self.tokens.clear();
        state.epoch = state.epoch.wrapping_add(1);
        state.session = Session::signed_out();
        state.screen = Screen::Auth;
        tracing::info!("Signed out");
    }
}

fn open_screening(state: &mut AppState, questionnaire: Questionnaire) -> Outcome {
    if state.screen != Screen::Dashboard {
        tracing::debug!(screen = ?state.screen, "Ignoring screening request outside dashboard");
        return Outcome::Rejected;
    }
    state.screen = Screen::Screening(questionnaire);
    Outcome::Applied
}

fn close_screening(state: &mut AppState) -> Outcome {
    if !matches!(state.screen, Screen::Screening(_)) {
        return Outcome::Rejected;
    }
    state.screen = Screen::Dashboard;
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::{
        ApiError, MoodRecord, NewUser, ScreeningResult, ScreeningSubmission, TokenResponse,
        UserProfile,
    };
    use store::MemoryStore;
    use tokio::sync::Notify;

    use super::*;

    impl StateSlot for RefCell<AppState> {
        fn snapshot(&self) -> AppState {
            self.borrow().clone()
        }

        fn publish(&self, started: u64, next: AppState) -> bool {
            self.borrow_mut().commit(started, next)
        }
    }

    const TOKEN: &str = "token-abc";

    /// Scripted server. Records every call it receives.
    #[derive(Clone, Default)]
    struct FakeBackend {
        consent_given: bool,
        reject_login: bool,
        reject_profile: bool,
        reject_mood: bool,
        /// When set, mood and screening requests wait here until notified.
        gate: Option<Rc<Notify>>,
        calls: Rc<RefCell<Vec<String>>>,
        moods: Rc<RefCell<Vec<MoodEntry>>>,
        screenings: Rc<RefCell<Vec<ScreeningSubmission>>>,
    }

    impl FakeBackend {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: &str) {
            self.calls.borrow_mut().push(call.to_string());
        }

        async fn wait_for_gate(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }

        fn profile(&self) -> UserProfile {
            UserProfile {
                email: "ada@example.org".to_string(),
                name: Some("Ada".to_string()),
                consent_given: self.consent_given,
                ..UserProfile::default()
            }
        }
    }

    fn server_error(status: u16, detail: &str) -> ApiError {
        ApiError::Server {
            status,
            detail: Some(detail.to_string()),
        }
    }

    impl Backend for FakeBackend {
        async fn login(&self, _credentials: &Credentials) -> Result<TokenResponse, ApiError> {
            self.record("login");
            if self.reject_login {
                return Err(server_error(401, "Incorrect email or password"));
            }
            Ok(TokenResponse {
                access_token: TOKEN.to_string(),
                token_type: Some("bearer".to_string()),
            })
        }

        async fn signup(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
            self.record("signup");
            if user.email == "taken@example.org" {
                return Err(server_error(400, "Email already registered"));
            }
            Ok(self.profile())
        }

        async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
            self.record("fetch_profile");
            if self.reject_profile || token != TOKEN {
                return Err(server_error(401, "Could not validate credentials"));
            }
            Ok(self.profile())
        }

        async fn give_consent(&self, _token: &str) -> Result<UserProfile, ApiError> {
            self.record("give_consent");
            Ok(UserProfile {
                consent_given: true,
                ..self.profile()
            })
        }

        async fn log_mood(&self, _token: &str, entry: &MoodEntry) -> Result<MoodRecord, ApiError> {
            self.record("log_mood");
            self.wait_for_gate().await;
            if self.reject_mood {
                return Err(server_error(500, "boom"));
            }
            self.moods.borrow_mut().push(entry.clone());
            Ok(MoodRecord {
                id: Some(1),
                score: entry.score,
                notes: Some(entry.notes.clone()),
                date: entry.date,
                owner_id: Some(1),
            })
        }

        async fn submit_screening(
            &self,
            _token: &str,
            submission: &ScreeningSubmission,
        ) -> Result<ScreeningResult, ApiError> {
            self.record("submit_screening");
            self.wait_for_gate().await;
            self.screenings.borrow_mut().push(submission.clone());
            Ok(ScreeningResult {
                score: submission.responses.iter().map(|r| u32::from(*r)).sum(),
                severity: "moderate".to_string(),
            })
        }
    }

    fn controller(backend: FakeBackend) -> Controller<FakeBackend, MemoryStore> {
        Controller::new(backend, TokenStore::new(MemoryStore::new()))
    }

    async fn signed_in(backend: FakeBackend) -> (Controller<FakeBackend, MemoryStore>, AppState) {
        let controller = controller(backend);
        let mut state = AppState::default();
        controller
            .handle(
                &mut state,
                Command::SignIn(Credentials::new("ada@example.org", "hunter22")),
            )
            .await;
        (controller, state)
    }

    fn phq9(answers: [Option<u8>; 9]) -> ResponseSheet {
        ResponseSheet::from_answers(Questionnaire::Phq9, &answers)
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_lands_on_auth() {
        let backend = FakeBackend::default();
        let controller = controller(backend.clone());
        let mut state = AppState::default();

        controller.handle(&mut state, Command::Bootstrap).await;

        assert_eq!(state.screen, Screen::Auth);
        assert_eq!(state.session, Session::signed_out());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_with_stale_token_signs_out() {
        let backend = FakeBackend {
            reject_profile: true,
            ..FakeBackend::default()
        };
        let controller = controller(backend.clone());
        controller.tokens().set("stale");
        let mut state = AppState::default();

        let outcome = controller.handle(&mut state, Command::Bootstrap).await;

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(state.screen, Screen::Auth);
        assert_eq!(state.session, Session::signed_out());
        assert!(controller.tokens().get().is_none());
        assert!(state.alert.is_none());
        assert_eq!(backend.calls(), vec!["fetch_profile"]);
    }

    #[tokio::test]
    async fn test_bootstrap_restores_consented_session() {
        let backend = FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        };
        let controller = controller(backend);
        controller.tokens().set(TOKEN);
        let mut state = AppState::default();

        controller.handle(&mut state, Command::Bootstrap).await;

        assert_eq!(state.screen, Screen::Dashboard);
        assert!(!state.session.loading);
        assert_eq!(state.token(), Some(TOKEN));
        assert_eq!(state.session.user.as_ref().map(|u| u.display_name()), Some("Ada"));
    }

    #[tokio::test]
    async fn test_login_routes_by_consent() {
        let (controller, state) = signed_in(FakeBackend::default()).await;
        assert_eq!(state.screen, Screen::Consent);
        assert_eq!(controller.tokens().get().as_deref(), Some(TOKEN));

        let (_, state) = signed_in(FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        })
        .await;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[tokio::test]
    async fn test_failed_login_alerts_and_stays_on_auth() {
        let (controller, state) = signed_in(FakeBackend {
            reject_login: true,
            ..FakeBackend::default()
        })
        .await;

        assert_eq!(state.screen, Screen::Auth);
        assert!(controller.tokens().get().is_none());
        let alert = state.alert.unwrap();
        assert_eq!(alert.title, "Login Failed");
        assert_eq!(alert.message, "Incorrect email or password");
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let backend = FakeBackend::default();
        let controller = controller(backend.clone());
        let mut state = AppState::default();
        let form = SignupForm {
            email: "ada@example.org".to_string(),
            password: "hunter22".to_string(),
            name: "Ada".to_string(),
            age: "34".to_string(),
            ..SignupForm::default()
        };

        let outcome = controller.handle(&mut state, Command::SignUp(form)).await;

        assert!(outcome.is_applied());
        assert_eq!(backend.calls(), vec!["signup", "login", "fetch_profile"]);
        assert_eq!(state.screen, Screen::Consent);
    }

    #[tokio::test]
    async fn test_signup_failures_alert() {
        let backend = FakeBackend::default();
        let controller = controller(backend.clone());
        let mut state = AppState::default();

        let invalid = SignupForm {
            email: "ada@example.org".to_string(),
            password: "hunter22".to_string(),
            name: "Ada".to_string(),
            age: "abc".to_string(),
            ..SignupForm::default()
        };
        controller.handle(&mut state, Command::SignUp(invalid.clone())).await;
        assert_eq!(state.alert.clone().unwrap().message, "Please enter a valid age");
        assert!(backend.calls().is_empty());

        let taken = SignupForm {
            email: "taken@example.org".to_string(),
            age: "34".to_string(),
            ..invalid
        };
        controller.handle(&mut state, Command::SignUp(taken)).await;
        let alert = state.alert.unwrap();
        assert_eq!(alert.title, "Sign-up Failed");
        assert_eq!(alert.message, "Email already registered");
        assert_eq!(state.screen, Screen::Auth);
    }

    #[tokio::test]
    async fn test_consent_moves_to_dashboard() {
        let (controller, mut state) = signed_in(FakeBackend::default()).await;

        controller.handle(&mut state, Command::GiveConsent).await;

        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.session.user.unwrap().consent_given);
    }

    #[tokio::test]
    async fn test_mood_choice_is_one_based() {
        let backend = FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        };
        let (controller, mut state) = signed_in(backend.clone()).await;

        let outcome = controller
            .handle(
                &mut state,
                Command::LogMood {
                    choice: 3,
                    notes: "walked".to_string(),
                },
            )
            .await;

        assert!(outcome.is_applied());
        let moods = backend.moods.borrow();
        assert_eq!(moods.len(), 1);
        assert_eq!(moods[0].score, 4);
        assert_eq!(moods[0].notes, "walked");
        assert_eq!(moods[0].date, chrono::Local::now().date_naive());
        assert_eq!(state.alert.clone().unwrap().title, "Success");
        drop(moods);
        assert_eq!(controller.backend().calls().last().map(String::as_str), Some("log_mood"));
    }

    #[tokio::test]
    async fn test_mood_failure_alerts() {
        let backend = FakeBackend {
            consent_given: true,
            reject_mood: true,
            ..FakeBackend::default()
        };
        let (controller, mut state) = signed_in(backend).await;

        let outcome = controller
            .handle(
                &mut state,
                Command::LogMood {
                    choice: 0,
                    notes: String::new(),
                },
            )
            .await;

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(
            state.alert.unwrap().message,
            "Could not save your mood. Please try again."
        );
    }

    #[tokio::test]
    async fn test_incomplete_screening_is_not_sent() {
        let backend = FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        };
        let (controller, mut state) = signed_in(backend.clone()).await;
        controller
            .handle(&mut state, Command::OpenScreening(Questionnaire::Phq9))
            .await;
        let calls_before = backend.calls().len();

        let mut answers = [Some(1); 9];
        answers[4] = None;
        let outcome = controller
            .handle(&mut state, Command::SubmitScreening(phq9(answers)))
            .await;

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(backend.calls().len(), calls_before);
        assert_eq!(state.screen, Screen::Screening(Questionnaire::Phq9));
        let alert = state.alert.unwrap();
        assert_eq!(alert.title, "Incomplete");
        assert_eq!(alert.message, "Please answer all questions.");
    }

    #[tokio::test]
    async fn test_complete_screening_reports_and_returns() {
        let backend = FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        };
        let (controller, mut state) = signed_in(backend.clone()).await;
        controller
            .handle(&mut state, Command::OpenScreening(Questionnaire::Phq9))
            .await;

        let answers = [0, 1, 2, 3, 0, 1, 2, 3, 0].map(Some);
        controller
            .handle(&mut state, Command::SubmitScreening(phq9(answers)))
            .await;

        assert_eq!(state.screen, Screen::Dashboard);
        let alert = state.alert.unwrap();
        assert_eq!(alert.title, "Screening Complete");
        assert!(alert.message.contains("12"));
        assert!(alert.message.contains("moderate"));
        assert_eq!(
            backend.screenings.borrow()[0].responses,
            vec![0, 1, 2, 3, 0, 1, 2, 3, 0]
        );
    }

    #[tokio::test]
    async fn test_screening_only_opens_from_dashboard() {
        let (controller, mut state) = signed_in(FakeBackend::default()).await;
        assert_eq!(state.screen, Screen::Consent);

        let outcome = controller
            .handle(&mut state, Command::OpenScreening(Questionnaire::Gad7))
            .await;
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(state.screen, Screen::Consent);
    }

    #[tokio::test]
    async fn test_cancel_screening() {
        let (controller, mut state) = signed_in(FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        })
        .await;
        controller
            .handle(&mut state, Command::OpenScreening(Questionnaire::Gad7))
            .await;
        assert_eq!(state.screen, Screen::Screening(Questionnaire::Gad7));

        controller.handle(&mut state, Command::CloseScreening).await;
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[tokio::test]
    async fn test_sign_out_from_every_screen() {
        let screens = [
            Screen::Auth,
            Screen::Consent,
            Screen::Dashboard,
            Screen::Screening(Questionnaire::Phq9),
        ];

        for screen in screens {
            let (controller, mut state) = signed_in(FakeBackend {
                consent_given: true,
                ..FakeBackend::default()
            })
            .await;
            state.screen = screen;

            controller.handle(&mut state, Command::SignOut).await;

            assert_eq!(state.screen, Screen::Auth);
            assert_eq!(state.session, Session::signed_out());
            assert!(controller.tokens().get().is_none());
        }
    }

    #[tokio::test]
    async fn test_dismiss_alert() {
        let controller = controller(FakeBackend::default());
        let mut state = AppState::default();
        state.show_alert("Success", "Your mood has been logged!");

        controller.handle(&mut state, Command::DismissAlert).await;
        assert!(state.alert.is_none());
    }

    async fn overlapping_sign_out(command: Command) {
        let gate = Rc::new(Notify::new());
        let (controller, state) = signed_in(FakeBackend {
            consent_given: true,
            gate: Some(gate.clone()),
            ..FakeBackend::default()
        })
        .await;
        let slot = RefCell::new(state);
        if let Command::SubmitScreening(_) = command {
            controller
                .dispatch(&slot, Command::OpenScreening(Questionnaire::Phq9))
                .await;
        }

        let pending = controller.dispatch(&slot, command);
        let sign_out = async {
            let outcome = controller.dispatch(&slot, Command::SignOut).await;
            gate.notify_one();
            outcome
        };
        let (pending, sign_out) = tokio::join!(pending, sign_out);

        assert_eq!(sign_out, Outcome::Applied);
        assert_eq!(pending, Outcome::Rejected);
        let state = slot.borrow();
        assert_eq!(state.screen, Screen::Auth);
        assert_eq!(state.session, Session::signed_out());
        assert!(state.alert.is_none());
        assert!(controller.tokens().get().is_none());
    }

    #[tokio::test]
    async fn test_mood_response_after_logout_is_discarded() {
        overlapping_sign_out(Command::LogMood {
            choice: 2,
            notes: String::new(),
        })
        .await;
    }

    #[tokio::test]
    async fn test_screening_response_after_logout_is_discarded() {
        overlapping_sign_out(Command::SubmitScreening(phq9([Some(1); 9]))).await;
    }

    #[tokio::test]
    async fn test_dispatch_publishes_sequential_commands() {
        let (controller, state) = signed_in(FakeBackend {
            consent_given: true,
            ..FakeBackend::default()
        })
        .await;
        let slot = RefCell::new(state);

        let outcome = controller
            .dispatch(&slot, Command::OpenScreening(Questionnaire::Gad7))
            .await;

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(slot.borrow().screen, Screen::Screening(Questionnaire::Gad7));
    }
}
