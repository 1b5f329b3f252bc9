//! Mentor management page

use std::time::Duration;

use flow::form::{FormController, FormMode};
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;

use crate::gateway::mentors::MentorGateway;
use crate::models::{Mentor, MentorDraft};

/// Controller of the mentor management screen
///
/// Mentors are never deleted, only deactivated, so there is no delete
/// confirmation here.
pub struct MentorPage<G: MentorGateway> {
    gateway: G,
    pub list: ListState<Mentor>,
    pub form: FormController<MentorDraft>,
    pub notices: Notices,
    pub search_term: String,
    pub loading: bool,
}

impl<G: MentorGateway> MentorPage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            list: ListState::new(),
            form: FormController::new(),
            notices: Notices::new(notification_ttl),
            search_term: String::new(),
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

    pub fn visible(&self) -> Vec<&Mentor> {
        self.list.view(&self.search_term, |_| true)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(MentorDraft::default());
    }

    pub fn open_edit(&mut self, mentor: &Mentor) {
        self.form.open_edit(mentor.into());
    }

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
                .map(|saved| (saved, "Akun mentor berhasil dibuat")),
            FormMode::Edit => {
                let Some(id) = draft.id else {
                    self.form.submit_failed("Target edit tidak ditemukan");
                    return;
                };
                self.gateway
                    .update(id, &draft)
                    .await
                    .map(|saved| (saved, "Data mentor berhasil diperbarui"))
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
                            list.patch(&id, |mentor| *mentor = saved);
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

    pub async fn toggle_active(&mut self, id: i64) {
        let Some(next) = self
            .list
            .items()
            .iter()
            .find(|mentor| mentor.id == id)
            .map(|mentor| !mentor.active)
        else {
            return;
        };

        match self.gateway.set_active(id, next).await {
            Ok(()) => {
                self.reconcile(Reconcile::PatchLocal, |list| {
                    list.patch(&id, |mentor| mentor.active = next);
                })
                .await;
                let message = if next {
                    "Mentor diaktifkan"
                } else {
                    "Mentor dinonaktifkan"
                };
                self.notices.push(NoticeKind::Success, message);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<Mentor>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
