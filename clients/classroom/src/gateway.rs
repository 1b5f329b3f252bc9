//! API gateways for the classroom area
//!
//! One small trait per resource at the seam between page controllers and
//! the network, backed by the shared [`ApiClient`](common::http::ApiClient).
//! Tests substitute in-memory fakes.

pub mod materials;
pub mod questions;
pub mod quizzes;
pub mod sections;

pub use materials::{MaterialApi, MaterialGateway};
pub use questions::{QuestionApi, QuestionGateway};
pub use quizzes::{QuizApi, QuizGateway};
pub use sections::{SectionApi, SectionGateway};
