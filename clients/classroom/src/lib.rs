//! Classroom area of the Kelasku client
//!
//! Screens for mentors managing their class content: sections, materials,
//! quizzes, and quiz questions. Each page is the standard composition from
//! the `flow` crate bound to its resource gateway and scoped to a parent
//! record (class, section, or quiz).

#![allow(async_fn_in_trait)]

pub mod gateway;
pub mod models;
pub mod pages;
pub mod validation;

/// Login route of the classroom area, used for the session-expiry redirect
pub const LOGIN_ROUTE: &str = "/login";
