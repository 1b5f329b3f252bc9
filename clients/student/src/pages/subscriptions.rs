//! Subscriptions and redeem page

use std::time::Duration;

use flow::form::DeleteConfirm;
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;
use tracing::info;

use crate::gateway::subscriptions::SubscriptionGateway;
use crate::models::Subscription;
use crate::validation;

/// Controller of the subscriptions screen
///
/// Cancelling asks for confirmation like a delete would, but the row stays
/// and only flips to cancelled. Applying a redeem code re-fetches the list
/// because the backend derives what the code granted and until when.
pub struct SubscriptionPage<G: SubscriptionGateway> {
    gateway: G,
    pub list: ListState<Subscription>,
    pub confirm: DeleteConfirm<i64>,
    pub notices: Notices,
    pub search_term: String,
    pub redeem_entry: String,
    pub loading: bool,
}

impl<G: SubscriptionGateway> SubscriptionPage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            list: ListState::new(),
            confirm: DeleteConfirm::new(),
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
            redeem_entry: String::new(),
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

    pub fn visible(&self) -> Vec<&Subscription> {
        self.list.view(&self.search_term, |_| true)
    }

    /// Subscribe to a class from the catalog
    pub async fn subscribe(&mut self, class_id: i64) {
        match self.gateway.subscribe(class_id).await {
            Ok(saved) => {
                self.reconcile(Reconcile::PatchLocal, |list| list.insert(saved))
                    .await;
                self.notices
                    .push(NoticeKind::Success, "Berhasil berlangganan");
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    pub fn request_cancel(&mut self, id: i64) {
        self.confirm.show(id);
    }

    pub fn dismiss_cancel(&mut self) {
        self.confirm.cancel();
    }

    /// Cancel the confirmed subscription; the row flips, it does not vanish
    pub async fn confirm_cancel(&mut self) {
        let id = match self.confirm.begin() {
            Ok(id) => id,
            Err(_) => return,
        };

        match self.gateway.cancel(id).await {
            Ok(saved) => {
                self.confirm.delete_succeeded();
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.patch(&id, |subscription| *subscription = saved);
                })
                .await;
                self.notices
                    .push(NoticeKind::Success, "Langganan dibatalkan");
            }
            Err(e) => {
                self.confirm.delete_failed();
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    /// Apply the entered redeem code
    pub async fn apply_redeem(&mut self) {
        let code = self.redeem_entry.trim().to_string();
        if let Err(message) = validation::validate_redeem_entry(&code) {
            self.notices.push(NoticeKind::Error, message);
            return;
        }

        match self.gateway.redeem(&code).await {
            Ok(message) => {
                info!("Redeem code applied");
                self.redeem_entry.clear();
                self.reconcile(Reconcile::Refetch, |_| {}).await;
                self.notices.push(
                    NoticeKind::Success,
                    message.unwrap_or_else(|| "Kode berhasil dipakai".to_string()),
                );
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<Subscription>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
