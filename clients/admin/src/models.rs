//! Admin area models
//!
//! Records arrive verbatim from the backend (camelCase JSON, numeric ids).
//! The client holds a transient cached copy only; nothing local is
//! persisted alongside it.

use chrono::{DateTime, Utc};
use flow::form::Draft;
use flow::list::{Keyed, Searchable};
use serde::{Deserialize, Serialize};

use crate::validation;

/// A redeem code granting mentoring access for a number of days
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCode {
    pub id: i64,
    /// Generated server-side; immutable, shown read-only in the edit modal
    pub code: String,
    pub description: String,
    pub duration_days: u32,
    pub max_uses: u32,
    pub use_count: u32,
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for RedeemCode {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for RedeemCode {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.code, &self.description]
    }
}

/// Editable fields of a redeem code
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCodeDraft {
    /// Target id when editing, `None` when creating
    #[serde(skip)]
    pub id: Option<i64>,
    pub description: String,
    pub duration_days: u32,
    pub max_uses: u32,
}

impl Default for RedeemCodeDraft {
    fn default() -> Self {
        Self {
            id: None,
            description: String::new(),
            duration_days: 30,
            max_uses: 1,
        }
    }
}

impl From<&RedeemCode> for RedeemCodeDraft {
    fn from(code: &RedeemCode) -> Self {
        Self {
            id: Some(code.id),
            description: code.description.clone(),
            duration_days: code.duration_days,
            max_uses: code.max_uses,
        }
    }
}

impl Draft for RedeemCodeDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_redeem_code(self)
    }
}

/// Status filter of the redeem-code list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedeemCodeFilter {
    #[default]
    All,
    Active,
    Expired,
    Exhausted,
}

impl RedeemCodeFilter {
    pub fn matches(&self, code: &RedeemCode) -> bool {
        match self {
            RedeemCodeFilter::All => true,
            RedeemCodeFilter::Active => code.active && code.use_count < code.max_uses,
            RedeemCodeFilter::Expired => code
                .expires_at
                .map(|at| at <= Utc::now())
                .unwrap_or(false),
            RedeemCodeFilter::Exhausted => code.use_count >= code.max_uses,
        }
    }
}

/// A mentor (teacher) account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub expertise: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Mentor {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Mentor {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.expertise]
    }
}

/// Editable fields of a mentor account
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub expertise: String,
}

impl From<&Mentor> for MentorDraft {
    fn from(mentor: &Mentor) -> Self {
        Self {
            id: Some(mentor.id),
            name: mentor.name.clone(),
            email: mentor.email.clone(),
            expertise: mentor.expertise.clone(),
        }
    }
}

impl Draft for MentorDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_mentor(self)
    }
}

/// A class review awaiting or past moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub student_name: String,
    pub class_title: String,
    pub rating: u8,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Review {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Review {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.student_name, &self.class_title, &self.comment]
    }
}

/// Moderation filter of the review list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    #[default]
    All,
    Pending,
    Approved,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Pending => !review.approved,
            ReviewFilter::Approved => review.approved,
        }
    }
}
