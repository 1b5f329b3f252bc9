//! Redeem-code management page

use std::time::Duration;

use flow::form::{DeleteConfirm, FormController, FormMode};
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;
use tracing::info;

use crate::gateway::redeem_codes::RedeemCodeGateway;
use crate::models::{RedeemCode, RedeemCodeDraft, RedeemCodeFilter};

/// Controller of the redeem-code management screen
pub struct RedeemCodePage<G: RedeemCodeGateway> {
    gateway: G,
    pub list: ListState<RedeemCode>,
    pub form: FormController<RedeemCodeDraft>,
    pub confirm: DeleteConfirm<i64>,
    pub notices: Notices,
    pub search_term: String,
    pub filter: RedeemCodeFilter,
    pub loading: bool,
}

impl<G: RedeemCodeGateway> RedeemCodePage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            list: ListState::new(),
            form: FormController::new(),
            confirm: DeleteConfirm::new(),
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
            filter: RedeemCodeFilter::All,
            loading: false,
        }
    }

    /// Load or manually refresh the list
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

    /// The rows currently visible under the search term and status filter
    pub fn visible(&self) -> Vec<&RedeemCode> {
        let filter = self.filter;
        self.list.view(&self.search_term, |code| filter.matches(code))
    }

    pub fn open_create(&mut self) {
        self.form.open_create(RedeemCodeDraft::default());
    }

    pub fn open_edit(&mut self, code: &RedeemCode) {
        self.form.open_edit(code.into());
    }

    /// Submit the open modal; a validation failure never reaches the network
    pub async fn submit(&mut self) {
        let (mode, draft) = match self.form.begin_submit() {
            Ok(prepared) => prepared,
            Err(_) => return,
        };

        let outcome = match mode {
            FormMode::Create => self
                .gateway
                .create(&draft)
                .await
                .map(|saved| (saved, "Kode redeem berhasil dibuat")),
            FormMode::Edit => {
                let Some(id) = draft.id else {
                    self.form.submit_failed("Target edit tidak ditemukan");
                    return;
                };
                self.gateway
                    .update(id, &draft)
                    .await
                    .map(|saved| (saved, "Kode redeem berhasil diperbarui"))
            }
        };

        match outcome {
            Ok((saved, message)) => {
                self.form.submit_succeeded();
                match mode {
                    FormMode::Create => {
                        self.reconcile(Reconcile::PatchLocal, |list| list.insert(saved))
                            .await
                    }
                    FormMode::Edit => {
                        let id = saved.id;
                        self.reconcile(Reconcile::PatchLocal, |list| {
                            list.patch(&id, |code| *code = saved);
                        })
                        .await
                    }
                }
                self.notices.push(NoticeKind::Success, message);
            }
            Err(e) => {
                self.form.submit_failed(e.to_string());
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    /// Flip a code's active status (pure status flip, patched locally)
    pub async fn toggle_active(&mut self, id: i64) {
        let Some(next) = self
            .list
            .items()
            .iter()
            .find(|code| code.id == id)
            .map(|code| !code.active)
        else {
            return;
        };

        match self.gateway.set_active(id, next).await {
            Ok(()) => {
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.patch(&id, |code| code.active = next);
                })
                .await;
                let message = if next {
                    "Kode redeem diaktifkan"
                } else {
                    "Kode redeem dinonaktifkan"
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

    /// Delete the confirmed target
    pub async fn confirm_delete(&mut self) {
        let id = match self.confirm.begin() {
            Ok(id) => id,
            Err(_) => return,
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                info!(id, "Redeem code deleted");
                self.confirm.delete_succeeded();
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.remove(&id);
                })
                .await;
                self.notices.push(NoticeKind::Success, "Kode redeem dihapus");
            }
            Err(e) => {
                self.confirm.delete_failed();
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<RedeemCode>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
