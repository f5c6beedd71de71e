//! Daily mood entries.
//!
//! The dashboard shows five faces; the face at index `i` records score
//! `i + 1` on the 1–5 scale. Entries are write-only from the client side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest and highest mood score accepted by the server.
pub const MOOD_SCORES: std::ops::RangeInclusive<u8> = 1..=5;

/// Body of `POST /moods/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodEntry {
    pub score: u8,
    pub notes: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl MoodEntry {
    /// Build an entry from the zero-based face index picked in the UI.
    pub fn from_choice(
        choice: usize,
        notes: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let score = choice
            .checked_add(1)
            .and_then(|score| u8::try_from(score).ok())
            .filter(|score| MOOD_SCORES.contains(score))
            .ok_or(ValidationError::MoodOutOfRange(choice))?;

        Ok(Self {
            score,
            notes: notes.into(),
            date,
        })
    }

    /// Same as [`from_choice`](Self::from_choice), dated with the local calendar day.
    pub fn for_today(choice: usize, notes: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_choice(choice, notes, chrono::Local::now().date_naive())
    }
}

/// Stored entry echoed back by the server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MoodRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub score: u8,
    #[serde(default)]
    pub notes: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub owner_id: Option<i64>,
}
