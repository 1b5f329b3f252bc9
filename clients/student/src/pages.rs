//! Page controllers for the student area
//!
//! A page controller owns everything a screen binds to: the list state, the
//! create/edit modal where one exists, the delete confirmation, the
//! notification slots, and the loading flag.

pub mod classes;
pub mod profile;
pub mod reviews;
pub mod subscriptions;

pub use classes::ClassBrowsePage;
pub use profile::ProfilePage;
pub use reviews::StudentReviewPage;
pub use subscriptions::SubscriptionPage;
