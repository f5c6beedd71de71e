//! Request and response bodies, one type per endpoint payload.

mod mood;
mod user;

pub use mood::{MoodEntry, MoodRecord, MOOD_SCORES};
pub use user::{ConsentUpdate, Credentials, NewUser, SignupForm, TokenResponse, UserProfile};
