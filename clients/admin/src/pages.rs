//! Page controllers for the admin area
//!
//! A page controller owns everything a screen binds to: the list state, the
//! create/edit modal, the delete confirmation, the notification slots, and
//! the loading flag. Handlers are the event callbacks of the screen.

pub mod mentors;
pub mod redeem_codes;
pub mod reviews;

pub use mentors::MentorPage;
pub use redeem_codes::RedeemCodePage;
pub use reviews::ReviewModerationPage;
