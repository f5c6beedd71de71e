mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod alert_modal;
pub use alert_modal::AlertModal;

mod auth;
pub use auth::AuthView;

mod consent;
pub use consent::ConsentView;

mod dashboard;
pub use dashboard::{DashboardView, MOOD_FACES};

mod screening;
pub use screening::ScreeningView;
