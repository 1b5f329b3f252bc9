//! Form/modal controller
//!
//! One small state machine per editable resource:
//! `Closed -> Open(Create|Edit) -> Submitting -> Closed` on success, or back
//! to `Open` with the draft preserved on failure. Local validation runs
//! before the network is touched, and while a submission is in flight no
//! second one can start. A parallel, simpler machine governs delete
//! confirmation.

/// Whether the modal was opened to create or to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// An editable draft with local validation rules
pub trait Draft: Clone {
    /// Check required fields and ranges; the message is shown inline in the
    /// open modal
    fn validate(&self) -> Result<(), String>;
}

/// State of a create/edit modal
#[derive(Debug, Clone)]
pub enum FormState<D> {
    Closed,
    Open {
        mode: FormMode,
        draft: D,
        error: Option<String>,
    },
    Submitting {
        mode: FormMode,
        draft: D,
    },
}

/// Why a submit attempt did not start a network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// No modal is open
    NotOpen,
    /// A submission is already in flight
    InFlight,
    /// Local validation failed; the message is also set inline
    Invalid(String),
}

/// Controller for one create/edit modal
#[derive(Debug)]
pub struct FormController<D: Draft> {
    state: FormState<D>,
}

impl<D: Draft> Default for FormController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> FormController<D> {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
        }
    }

    pub fn state(&self) -> &FormState<D> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    /// Open the modal for a new resource, seeding default fields
    pub fn open_create(&mut self, defaults: D) {
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft: defaults,
            error: None,
        };
    }

    /// Open the modal for an existing resource, copying its editable fields
    pub fn open_edit(&mut self, draft: D) {
        self.state = FormState::Open {
            mode: FormMode::Edit,
            draft,
            error: None,
        };
    }

    /// Close the modal, discarding the draft (no effect while submitting)
    pub fn cancel(&mut self) {
        if matches!(self.state, FormState::Open { .. }) {
            self.state = FormState::Closed;
        }
    }

    /// Edit the open draft
    pub fn update(&mut self, apply: impl FnOnce(&mut D)) -> bool {
        match &mut self.state {
            FormState::Open { draft, .. } => {
                apply(draft);
                true
            }
            _ => false,
        }
    }

    /// Validate and move to `Submitting`, handing back the draft for the
    /// network call
    ///
    /// Validation failure keeps the modal open with an inline message and
    /// never reaches the network; a submit while one is already in flight is
    /// rejected.
    pub fn begin_submit(&mut self) -> Result<(FormMode, D), SubmitBlocked> {
        match std::mem::replace(&mut self.state, FormState::Closed) {
            FormState::Closed => Err(SubmitBlocked::NotOpen),
            FormState::Submitting { mode, draft } => {
                self.state = FormState::Submitting { mode, draft };
                Err(SubmitBlocked::InFlight)
            }
            FormState::Open { mode, draft, .. } => match draft.validate() {
                Ok(()) => {
                    self.state = FormState::Submitting {
                        mode,
                        draft: draft.clone(),
                    };
                    Ok((mode, draft))
                }
                Err(message) => {
                    self.state = FormState::Open {
                        mode,
                        draft,
                        error: Some(message.clone()),
                    };
                    Err(SubmitBlocked::Invalid(message))
                }
            },
        }
    }

    /// The mutation succeeded: close and reset
    pub fn submit_succeeded(&mut self) {
        self.state = FormState::Closed;
    }

    /// The mutation failed: reopen with the draft preserved so the user
    /// loses nothing
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if let FormState::Submitting { mode, draft } =
            std::mem::replace(&mut self.state, FormState::Closed)
        {
            self.state = FormState::Open {
                mode,
                draft,
                error: Some(message.into()),
            };
        }
    }
}

/// State of a delete-confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmState<K> {
    Hidden,
    Shown(K),
    Deleting(K),
}

/// Why a delete attempt did not start a network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmBlocked {
    NotShown,
    InFlight,
}

/// Controller for one delete-confirmation dialog
#[derive(Debug)]
pub struct DeleteConfirm<K: Clone + PartialEq> {
    state: ConfirmState<K>,
}

impl<K: Clone + PartialEq> Default for DeleteConfirm<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq> DeleteConfirm<K> {
    pub fn new() -> Self {
        Self {
            state: ConfirmState::Hidden,
        }
    }

    pub fn state(&self) -> &ConfirmState<K> {
        &self.state
    }

    /// Show the dialog for a target (ignored while a delete is in flight)
    pub fn show(&mut self, target: K) {
        if !matches!(self.state, ConfirmState::Deleting(_)) {
            self.state = ConfirmState::Shown(target);
        }
    }

    /// Dismiss without deleting
    pub fn cancel(&mut self) {
        if matches!(self.state, ConfirmState::Shown(_)) {
            self.state = ConfirmState::Hidden;
        }
    }

    /// Confirm: move to `Deleting` and hand back the target for the call
    pub fn begin(&mut self) -> Result<K, ConfirmBlocked> {
        match std::mem::replace(&mut self.state, ConfirmState::Hidden) {
            ConfirmState::Hidden => Err(ConfirmBlocked::NotShown),
            ConfirmState::Deleting(target) => {
                self.state = ConfirmState::Deleting(target);
                Err(ConfirmBlocked::InFlight)
            }
            ConfirmState::Shown(target) => {
                self.state = ConfirmState::Deleting(target.clone());
                Ok(target)
            }
        }
    }

    pub fn delete_succeeded(&mut self) {
        self.state = ConfirmState::Hidden;
    }

    /// Deletion failed: the dialog stays up for a retry
    pub fn delete_failed(&mut self) {
        if let ConfirmState::Deleting(target) =
            std::mem::replace(&mut self.state, ConfirmState::Hidden)
        {
            self.state = ConfirmState::Shown(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TitleDraft {
        title: String,
    }

    impl Draft for TitleDraft {
        fn validate(&self) -> Result<(), String> {
            if self.title.trim().is_empty() {
                return Err("Judul wajib diisi".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_invalid_draft_stays_open_without_submit() {
        let mut form = FormController::new();
        form.open_create(TitleDraft {
            title: String::new(),
        });

        let blocked = form.begin_submit().unwrap_err();
        assert_eq!(blocked, SubmitBlocked::Invalid("Judul wajib diisi".to_string()));
        assert!(form.is_open());

        match form.state() {
            FormState::Open { error, .. } => {
                assert_eq!(error.as_deref(), Some("Judul wajib diisi"))
            }
            _ => panic!("form must stay open"),
        }
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = FormController::new();
        form.open_create(TitleDraft {
            title: "Bab 1".to_string(),
        });

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_failure_preserves_draft() {
        let mut form = FormController::new();
        form.open_edit(TitleDraft {
            title: "Bab 2: Aljabar".to_string(),
        });

        let (mode, sent) = form.begin_submit().unwrap();
        assert_eq!(mode, FormMode::Edit);

        form.submit_failed("Gagal menyimpan");
        match form.state() {
            FormState::Open { draft, error, .. } => {
                assert_eq!(draft, &sent, "draft must be unchanged after a failure");
                assert_eq!(error.as_deref(), Some("Gagal menyimpan"));
            }
            _ => panic!("form must reopen on failure"),
        }
    }

    #[test]
    fn test_success_closes_and_resets() {
        let mut form = FormController::new();
        form.open_create(TitleDraft {
            title: "Bab 3".to_string(),
        });
        form.begin_submit().unwrap();
        form.submit_succeeded();
        assert!(matches!(form.state(), FormState::Closed));
    }

    #[test]
    fn test_confirm_cancel_keeps_target() {
        let mut confirm: DeleteConfirm<i64> = DeleteConfirm::new();
        confirm.show(7);
        confirm.cancel();
        assert_eq!(confirm.state(), &ConfirmState::Hidden);
        assert_eq!(confirm.begin().unwrap_err(), ConfirmBlocked::NotShown);
    }

    #[test]
    fn test_confirm_flow_and_failure() {
        let mut confirm: DeleteConfirm<i64> = DeleteConfirm::new();
        confirm.show(7);

        assert_eq!(confirm.begin().unwrap(), 7);
        assert_eq!(confirm.begin().unwrap_err(), ConfirmBlocked::InFlight);

        confirm.delete_failed();
        assert_eq!(confirm.state(), &ConfirmState::Shown(7));

        confirm.begin().unwrap();
        confirm.delete_succeeded();
        assert_eq!(confirm.state(), &ConfirmState::Hidden);
    }
}
