//! Quiz question management page

use std::time::Duration;

use flow::form::{DeleteConfirm, FormController, FormMode};
use flow::list::ListState;
use flow::notify::{NoticeKind, Notices};
use flow::reconcile::Reconcile;

use crate::gateway::questions::QuestionGateway;
use crate::models::{Question, QuestionDraft};

/// Controller of the question management screen, scoped to one quiz
pub struct QuestionPage<G: QuestionGateway> {
    gateway: G,
    quiz_id: i64,
    pub list: ListState<Question>,
    pub form: FormController<QuestionDraft>,
    pub confirm: DeleteConfirm<i64>,
    pub notices: Notices,
    pub search_term: String,
    pub loading: bool,
}

impl<G: QuestionGateway> QuestionPage<G> {
    pub fn new(gateway: G, quiz_id: i64, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            quiz_id,
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
        match self.gateway.list(self.quiz_id).await {
            Ok(items) => {
                self.list.complete_load(ticket, items);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
        self.loading = false;
    }

    /// Questions ordered by their position within the quiz
    pub fn visible(&self) -> Vec<&Question> {
        self.list.view_sorted(
            &self.search_term,
            |_| true,
            |a, b| a.position.cmp(&b.position),
        )
    }

    pub fn open_create(&mut self) {
        self.form.open_create(QuestionDraft::default());
    }

    pub fn open_edit(&mut self, question: &Question) {
        self.form.open_edit(question.into());
    }

    /// Mark one answer option of the open draft correct, clearing the rest
    pub fn mark_correct(&mut self, index: usize) {
        self.form.update(|draft| draft.mark_correct(index));
    }

    pub fn add_answer(&mut self) {
        self.form.update(|draft| draft.add_answer());
    }

    pub fn remove_answer(&mut self, index: usize) {
        self.form.update(|draft| draft.remove_answer(index));
    }

    pub async fn submit(&mut self) {
        let (mode, draft) = match self.form.begin_submit() {
            Ok(prepared) => prepared,
            Err(_) => return,
        };

        let outcome = match mode {
            FormMode::Create => self
                .gateway
                .create(self.quiz_id, &draft)
                .await
                .map(|saved| (saved, "Pertanyaan berhasil ditambahkan")),
            FormMode::Edit => {
                let Some(id) = draft.id else {
                    self.form.submit_failed("Target edit tidak ditemukan");
                    return;
                };
                self.gateway
                    .update(id, &draft)
                    .await
                    .map(|saved| (saved, "Pertanyaan berhasil diperbarui"))
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
                            list.patch(&id, |question| *question = saved);
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

    /// Delete the confirmed question and re-fetch; the backend renumbers the
    /// remaining questions
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
                self.notices.push(NoticeKind::Success, "Pertanyaan dihapus");
            }
            Err(e) => {
                self.confirm.delete_failed();
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    async fn reconcile(&mut self, how: Reconcile, apply: impl FnOnce(&mut ListState<Question>)) {
        match how {
            Reconcile::PatchLocal => apply(&mut self.list),
            Reconcile::Refetch => self.refresh().await,
        }
    }
}
