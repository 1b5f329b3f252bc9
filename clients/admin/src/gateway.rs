//! API gateways for the admin area
//!
//! One small trait per resource at the seam between page controllers and
//! the network, backed by the shared [`ApiClient`](common::http::ApiClient).
//! Tests substitute in-memory fakes.

pub mod mentors;
pub mod redeem_codes;
pub mod reviews;

pub use mentors::{MentorApi, MentorGateway};
pub use redeem_codes::{RedeemCodeApi, RedeemCodeGateway};
pub use reviews::{ReviewApi, ReviewGateway};
