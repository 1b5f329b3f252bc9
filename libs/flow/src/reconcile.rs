//! Reconcile strategy after a successful mutation
//!
//! Some endpoints recompute derived fields server-side (aggregate ratings,
//! derived expiry dates); after those the whole list is re-fetched. Pure
//! status flips and creates are applied locally instead. The choice is an
//! explicit parameter of each mutation, not an accident of the screen.

/// How the local list is brought back in sync after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Re-fetch the whole list from the backend
    Refetch,
    /// Apply the change to the local list without a re-fetch
    PatchLocal,
}
