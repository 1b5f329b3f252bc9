//! Student area models

use chrono::{DateTime, Utc};
use flow::form::Draft;
use flow::list::{Keyed, Searchable};
use serde::{Deserialize, Serialize};

use crate::validation;

/// A class as shown in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub mentor_name: String,
    pub category: String,
    pub rating: f32,
    pub review_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Keyed for ClassSummary {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for ClassSummary {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.mentor_name, &self.category]
    }
}

/// A review written by the signed-in student
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub class_id: i64,
    pub class_title: String,
    /// 1 to 5 stars
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
        vec![&self.class_title, &self.comment]
    }
}

/// Editable fields of a review
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub class_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// Seed a draft for a new review of `class_id`
    pub fn for_class(class_id: i64) -> Self {
        Self {
            id: None,
            class_id,
            rating: 5,
            comment: String::new(),
        }
    }
}

impl From<&Review> for ReviewDraft {
    fn from(review: &Review) -> Self {
        Self {
            id: Some(review.id),
            class_id: review.class_id,
            rating: review.rating,
            comment: review.comment.clone(),
        }
    }
}

impl Draft for ReviewDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_review(self)
    }
}

/// Lifecycle of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

/// A class subscription of the signed-in student
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub class_id: i64,
    pub class_title: String,
    pub status: SubscriptionStatus,
    pub started_at: DateTime<Utc>,
    /// Derived server-side, also when a redeem code extends it
    pub expires_at: DateTime<Utc>,
}

impl Keyed for Subscription {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Subscription {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.class_title]
    }
}

/// The signed-in student's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    /// Account identity; shown but never editable
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of the profile (the email is not among them)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub phone: String,
    pub bio: String,
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            phone: profile.phone.clone(),
            bio: profile.bio.clone(),
        }
    }
}

impl Draft for ProfileDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_profile(self)
    }
}
