//! Per-page state machinery for the Kelasku client workspace
//!
//! Every screen in the application is the same composition: a fetched list,
//! a create/edit modal, a delete confirmation, and transient notifications.
//! This crate holds that machinery, generalized once, so the client crates
//! only supply resource types, validation rules, and endpoints.

pub mod form;
pub mod list;
pub mod notify;
pub mod reconcile;
