//! Review moderation page

use std::time::Duration;

use flow::form::DeleteConfirm;
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;

use crate::gateway::reviews::ReviewGateway;
use crate::models::{Review, ReviewFilter};

/// Controller of the review moderation screen
///
/// Moderation has no create/edit modal; approval is a status flip patched
/// locally, while deletion re-fetches the list because the backend
/// recomputes aggregate class ratings.
pub struct ReviewModerationPage<G: ReviewGateway> {
    gateway: G,
    pub list: ListState<Review>,
    pub confirm: DeleteConfirm<i64>,
    pub notices: Notices,
    pub search_term: String,
    pub filter: ReviewFilter,
    pub loading: bool,
}

impl<G: ReviewGateway> ReviewModerationPage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            list: ListState::new(),
            confirm: DeleteConfirm::new(),
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
            filter: ReviewFilter::All,
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let ticket = self.list.begin_load();
        match self.gateway.list().await {
            Ok(items) => {
                self.list.complete_load(ticket, items);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<&Review> {
        let filter = self.filter;
        self.list
            .view(&self.search_term, |review| filter.matches(review))
    }

    /// Approve or unapprove a review (status flip, patched locally)
    pub async fn set_approved(&mut self, id: i64, approved: bool) {
        match self.gateway.set_approved(id, approved).await {
            Ok(()) => {
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.patch(&id, |review| review.approved = approved);
                })
                .await;
                let message = if approved {
                    "Ulasan disetujui"
                } else {
                    "Persetujuan ulasan dibatalkan"
                };
                self.notices.push(NoticeKind::Success, message);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.confirm.show(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Delete the confirmed review and re-fetch (aggregate ratings change)
    pub async fn confirm_delete(&mut self) {
        let id = match self.confirm.begin() {
            Ok(id) => id,
            Err(_) => return,
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.confirm.delete_succeeded();
                self.reconcile(Reconcile::Refetch, |list| {
                    list.remove(&id);
                })
                .await;
                self.notices.push(NoticeKind::Success, "Ulasan dihapus");
            }
            Err(e) => {
                self.confirm.delete_failed();
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<Review>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
