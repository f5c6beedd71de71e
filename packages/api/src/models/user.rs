//! # Account payloads
//!
//! ## [`UserProfile`]
//!
//! The server's view of the signed-in user, returned by `GET /users/me/`,
//! `PATCH /users/me/consent` and `POST /users/`. The client only ever holds a
//! read-through copy. Everything except `email` and `consent_given` is
//! optional so older or partial profiles still deserialize.
//! [`UserProfile::display_name`] returns the name or `"User"`.
//!
//! ## [`SignupForm`] → [`NewUser`]
//!
//! The signup screen collects raw strings into a [`SignupForm`].
//! [`SignupForm::into_new_user`] trims and validates them (name, email and
//! password required, age must be a whole number) and produces the typed
//! [`NewUser`] body for `POST /users/`. Blank optional fields become `null`.
//!
//! ## [`Credentials`], [`TokenResponse`], [`ConsentUpdate`]
//!
//! Login input, login output, and the consent patch body.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// User profile as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub consent_given: bool,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub local_language: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
}

impl UserProfile {
    /// Name for greetings, falling back to `"User"`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "User",
        }
    }
}

/// Email and password as typed by the user.
#[derive(Clone, Default, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `PATCH /users/me/consent`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConsentUpdate {
    pub consent_given: bool,
}

/// Body of `POST /users/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub region: Option<String>,
    pub local_language: Option<String>,
    pub education_level: Option<String>,
}

impl NewUser {
    /// Credentials for the login that follows a successful signup.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// Raw signup input, one string per form field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub region: String,
    pub local_language: String,
    pub education_level: String,
}

fn optional(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl SignupForm {
    pub fn into_new_user(self) -> Result<NewUser, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }

        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidAge)?;

        Ok(NewUser {
            email,
            password: self.password,
            name,
            age,
            gender: optional(&self.gender),
            region: optional(&self.region),
            local_language: optional(&self.local_language),
            education_level: optional(&self.education_level),
        })
    }
}
