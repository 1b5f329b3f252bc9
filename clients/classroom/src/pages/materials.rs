//! Material management page

use std::time::Duration;

use flow::form::{DeleteConfirm, FormController, FormMode};
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;

use crate::gateway::materials::MaterialGateway;
use crate::models::{Material, MaterialDraft};

/// Controller of the material management screen, scoped to one section
pub struct MaterialPage<G: MaterialGateway> {
    gateway: G,
    section_id: i64,
    pub list: ListState<Material>,
    pub form: FormController<MaterialDraft>,
    pub confirm: DeleteConfirm<i64>,
    pub notices: Notices,
    pub search_term: String,
    pub loading: bool,
}

impl<G: MaterialGateway> MaterialPage<G> {
    pub fn new(gateway: G, section_id: i64, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            section_id,
            list: ListState::new(),
            form: FormController::new(),
            confirm: DeleteConfirm::new(),
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let ticket = self.list.begin_load();
        match self.gateway.list(self.section_id).await {
            Ok(items) => {
                self.list.complete_load(ticket, items);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
        self.loading = false;
    }

    /// Materials ordered by their position within the section
    pub fn visible(&self) -> Vec<&Material> {
        self.list.view_sorted(
            &self.search_term,
            |_| true,
            |a, b| a.position.cmp(&b.position),
        )
    }

    pub fn open_create(&mut self) {
        self.form.open_create(MaterialDraft {
            position: self.list.len() as u32 + 1,
            ..Default::default()
        });
    }

    pub fn open_edit(&mut self, material: &Material) {
        self.form.open_edit(material.into());
    }

    pub async fn submit(&mut self) {
        let (mode, draft) = match self.form.begin_submit() {
            Ok(prepared) => prepared,
            Err(_) => return,
        };

        let outcome = match mode {
            FormMode::Create => self
                .gateway
                .create(self.section_id, &draft)
                .await
                .map(|saved| (saved, "Materi berhasil ditambahkan")),
            FormMode::Edit => {
                let Some(id) = draft.id else {
                    self.form.submit_failed("Target edit tidak ditemukan");
                    return;
                };
                self.gateway
                    .update(id, &draft)
                    .await
                    .map(|saved| (saved, "Materi berhasil diperbarui"))
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
                            list.patch(&id, |material| *material = saved);
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

    pub fn request_delete(&mut self, id: i64) {
        self.confirm.show(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Delete the confirmed material
    pub async fn confirm_delete(&mut self) {
        let id = match self.confirm.begin() {
            Ok(id) => id,
            Err(_) => return,
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.confirm.delete_succeeded();
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.remove(&id);
                })
                .await;
                self.notices.push(NoticeKind::Success, "Materi dihapus");
            }
            Err(e) => {
                self.confirm.delete_failed();
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<Material>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
