//! Student area of the Kelasku client
//!
//! Screens for enrolled students: browsing the class catalog, writing and
//! managing their own reviews, handling subscriptions and redeem codes, and
//! editing their profile. Catalog browsing is the one paginated list in the
//! client; everything else follows the standard composition from the `flow`
//! crate.

#![allow(async_fn_in_trait)]

pub mod gateway;
pub mod models;
pub mod pages;
pub mod validation;

/// Login route of the student area, used for the session-expiry redirect
pub const LOGIN_ROUTE: &str = "/login";
