//! Classroom area models
//!
//! Class content is a three-level tree: a class owns sections, a section
//! owns materials and quizzes, a quiz owns questions. Records arrive
//! verbatim from the backend (camelCase JSON, numeric ids); every list
//! here is scoped to its parent id.

use chrono::{DateTime, Utc};
use flow::form::Draft;
use flow::list::{Keyed, Searchable};
use serde::{Deserialize, Serialize};

use crate::validation;

/// A section (chapter) of a class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: String,
    /// 1-based order within the class
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Section {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Section {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

/// Editable fields of a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub position: u32,
}

impl Default for SectionDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            position: 1,
        }
    }
}

impl From<&Section> for SectionDraft {
    fn from(section: &Section) -> Self {
        Self {
            id: Some(section.id),
            title: section.title.clone(),
            description: section.description.clone(),
            position: section.position,
        }
    }
}

impl Draft for SectionDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_section(self)
    }
}

/// Kind of learning material within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Video,
    Document,
}

/// A learning material (video or document) within a section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub kind: MaterialKind,
    pub url: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Material {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Material {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

/// Editable fields of a material
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub title: String,
    pub kind: MaterialKind,
    pub url: String,
    pub position: u32,
}

impl Default for MaterialDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            kind: MaterialKind::Video,
            url: String::new(),
            position: 1,
        }
    }
}

impl From<&Material> for MaterialDraft {
    fn from(material: &Material) -> Self {
        Self {
            id: Some(material.id),
            title: material.title.clone(),
            kind: material.kind,
            url: material.url.clone(),
            position: material.position,
        }
    }
}

impl Draft for MaterialDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_material(self)
    }
}

/// A quiz attached to a section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Minimum score to pass, 0 to 100
    pub passing_score: u8,
    pub question_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Quiz {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Quiz {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

/// Editable fields of a quiz
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub passing_score: u8,
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            duration_minutes: 10,
            passing_score: 70,
        }
    }
}

impl From<&Quiz> for QuizDraft {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: Some(quiz.id),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            duration_minutes: quiz.duration_minutes,
            passing_score: quiz.passing_score,
        }
    }
}

impl Draft for QuizDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_quiz(self)
    }
}

/// An answer option of a quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

/// A quiz question with its answer options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub prompt: String,
    pub answers: Vec<Answer>,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Question {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Searchable for Question {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.prompt]
    }
}

/// Editable fields of a question
///
/// A question needs exactly one correct answer; [`mark_correct`] keeps the
/// options mutually exclusive so the screen only ever toggles one radio.
///
/// [`mark_correct`]: QuestionDraft::mark_correct
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub prompt: String,
    pub answers: Vec<Answer>,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            id: None,
            prompt: String::new(),
            answers: vec![
                Answer {
                    text: String::new(),
                    is_correct: false,
                },
                Answer {
                    text: String::new(),
                    is_correct: false,
                },
            ],
        }
    }
}

impl QuestionDraft {
    /// Mark one option correct and every other option incorrect
    pub fn mark_correct(&mut self, index: usize) {
        for (i, answer) in self.answers.iter_mut().enumerate() {
            answer.is_correct = i == index;
        }
    }

    pub fn add_answer(&mut self) {
        self.answers.push(Answer {
            text: String::new(),
            is_correct: false,
        });
    }

    /// Remove an option; the two-option minimum is enforced on validation
    pub fn remove_answer(&mut self, index: usize) {
        if index < self.answers.len() {
            self.answers.remove(index);
        }
    }
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            id: Some(question.id),
            prompt: question.prompt.clone(),
            answers: question.answers.clone(),
        }
    }
}

impl Draft for QuestionDraft {
    fn validate(&self) -> Result<(), String> {
        validation::validate_question(self)
    }
}
