//! # Screening questionnaires
//!
//! The server scores two standard instruments, identified on the wire by
//! [`Questionnaire::name`]:
//!
//! | Variant | Wire name | Items | Range |
//! |---------|-----------|-------|-------|
//! | [`Questionnaire::Phq9`] | `"phq-9"` | 9 | 0–27 |
//! | [`Questionnaire::Gad7`] | `"gad-7"` | 7 | 0–21 |
//!
//! Every item is answered on the same four-point frequency scale
//! ([`ANSWER_OPTIONS`], values 0–3). Scoring and severity bands stay on the
//! server; this module only knows the item text.
//!
//! A [`ResponseSheet`] tracks the answers picked so far. It only converts into
//! a [`ScreeningSubmission`] once every item has an answer, so an incomplete
//! sheet can never be sent.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Answer labels, indexed by answer value.
pub const ANSWER_OPTIONS: [&str; 4] = [
    "Not at all (0)",
    "Several days (1)",
    "More than half (2)",
    "Nearly every day (3)",
];

/// Highest answer value.
pub const MAX_ANSWER: u8 = 3;

const PHQ9_ITEMS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself",
    "Trouble concentrating on things",
    "Moving or speaking slowly, or being fidgety/restless",
    "Thoughts that you would be better off dead or of hurting yourself",
];

const GAD7_ITEMS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Questionnaire {
    Phq9,
    Gad7,
}

impl Questionnaire {
    pub const ALL: [Questionnaire; 2] = [Questionnaire::Phq9, Questionnaire::Gad7];

    /// Identifier sent as `questionnaire_name`.
    pub fn name(&self) -> &'static str {
        match self {
            Questionnaire::Phq9 => "phq-9",
            Questionnaire::Gad7 => "gad-7",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Questionnaire::Phq9 => "PHQ-9 Depression Screening",
            Questionnaire::Gad7 => "GAD-7 Anxiety Screening",
        }
    }

    /// Label for the dashboard button that opens this questionnaire.
    pub fn launch_label(&self) -> &'static str {
        match self {
            Questionnaire::Phq9 => "Take PHQ-9 Depression Test",
            Questionnaire::Gad7 => "Take GAD-7 Anxiety Test",
        }
    }

    pub fn prompt(&self) -> &'static str {
        "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
    }

    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Questionnaire::Phq9 => &PHQ9_ITEMS,
            Questionnaire::Gad7 => &GAD7_ITEMS,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }
}

/// Body of `POST /screenings/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScreeningSubmission {
    pub questionnaire_name: String,
    pub responses: Vec<u8>,
}

/// Server-computed outcome of a screening.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScreeningResult {
    pub score: u32,
    pub severity: String,
}

/// Answers collected so far for one questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSheet {
    questionnaire: Questionnaire,
    answers: Vec<Option<u8>>,
}

impl ResponseSheet {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            answers: vec![None; questionnaire.len()],
        }
    }

    /// Build a sheet from pre-filled answers. Extra answers are dropped and
    /// missing ones stay unanswered.
    pub fn from_answers(questionnaire: Questionnaire, answers: &[Option<u8>]) -> Self {
        let mut sheet = Self::new(questionnaire);
        for (slot, answer) in sheet.answers.iter_mut().zip(answers) {
            *slot = *answer;
        }
        sheet
    }

    pub fn questionnaire(&self) -> Questionnaire {
        self.questionnaire
    }

    /// Record an answer. Out-of-range items are ignored; out-of-range values
    /// are rejected.
    pub fn answer(&mut self, item: usize, value: u8) -> Result<(), ValidationError> {
        if value > MAX_ANSWER {
            return Err(ValidationError::AnswerOutOfRange { index: item, value });
        }
        if let Some(slot) = self.answers.get_mut(item) {
            *slot = Some(value);
        }
        Ok(())
    }

    pub fn answer_at(&self, item: usize) -> Option<u8> {
        self.answers.get(item).copied().flatten()
    }

    /// Zero-based indices of the unanswered items.
    pub fn missing(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Convert into a request body, failing if any item is unanswered.
    pub fn submission(&self) -> Result<ScreeningSubmission, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::Incomplete {
                missing: self.missing(),
            });
        }

        Ok(ScreeningSubmission {
            questionnaire_name: self.questionnaire.name().to_string(),
            responses: self.answers.iter().flatten().copied().collect(),
        })
    }
}
