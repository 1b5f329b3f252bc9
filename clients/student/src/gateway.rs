//! API gateways for the student area
//!
//! One small trait per resource at the seam between page controllers and
//! the network, backed by the shared [`ApiClient`](common::http::ApiClient).
//! Tests substitute in-memory fakes.

pub mod classes;
pub mod profile;
pub mod reviews;
pub mod subscriptions;

pub use classes::{ClassApi, ClassGateway};
pub use profile::{ProfileApi, ProfileGateway};
pub use reviews::{ReviewApi, ReviewGateway};
pub use subscriptions::{SubscriptionApi, SubscriptionGateway};
