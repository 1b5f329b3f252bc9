//! Page controllers for the classroom area
//!
//! A page controller owns everything a screen binds to: the list state, the
//! create/edit modal, the delete confirmation, the notification slots, and
//! the loading flag. Every classroom page is scoped to the parent record it
//! was opened from.

pub mod materials;
pub mod questions;
pub mod quizzes;
pub mod sections;

pub use materials::MaterialPage;
pub use questions::QuestionPage;
pub use quizzes::QuizPage;
pub use sections::SectionPage;
