//! Admin area of the Kelasku client
//!
//! Screens for platform administrators: redeem-code management, mentor
//! (teacher account) management, and review moderation. Each page is the
//! standard composition from the `flow` crate bound to its resource
//! gateway; the admin area redirects expired sessions to "/auth/login".

#![allow(async_fn_in_trait)]

pub mod gateway;
pub mod models;
pub mod pages;
pub mod validation;

/// Login route of the admin area, used for the session-expiry redirect
pub const LOGIN_ROUTE: &str = "/auth/login";
