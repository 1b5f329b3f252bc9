//! Common library for the Kelasku client workspace
//!
//! This crate provides the infrastructure shared by every client area
//! (admin, classroom, student): configuration, the API error taxonomy,
//! the backend response envelope, the session token store, and the
//! authenticated HTTP fetcher.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod session;
