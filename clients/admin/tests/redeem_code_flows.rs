//! Redeem-code page flows against an in-memory gateway
//!
//! These tests drive the page controller exactly as the screen would:
//! open a modal, edit the draft, submit, confirm deletions. The fake
//! gateway records every network call so the "no network on local
//! validation failure" properties are observable.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use admin::gateway::redeem_codes::RedeemCodeGateway;
use admin::models::{RedeemCode, RedeemCodeDraft};
use admin::pages::RedeemCodePage;
use chrono::Utc;
use common::error::{ApiError, ApiResult};
use flow::form::FormState;
use flow::notify::NoticeKind;

fn sample(id: i64, code: &str, description: &str) -> RedeemCode {
    RedeemCode {
        id,
        code: code.to_string(),
        description: description.to_string(),
        duration_days: 30,
        max_uses: 5,
        use_count: 0,
        active: true,
        expires_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
struct Inner {
    codes: Mutex<Vec<RedeemCode>>,
    calls: Mutex<Vec<String>>,
    fail_mutations_with: Mutex<Option<String>>,
    session_expired: Mutex<bool>,
}

/// In-memory stand-in for the redeem-code endpoints
#[derive(Clone, Default)]
struct FakeRedeemCodes {
    inner: Arc<Inner>,
}

impl FakeRedeemCodes {
    fn seeded(codes: Vec<RedeemCode>) -> Self {
        let fake = Self::default();
        *fake.inner.codes.lock().unwrap() = codes;
        fake
    }

    fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.inner.calls.lock().unwrap().push(call.to_string());
    }

    fn mutation_error(&self) -> Option<ApiError> {
        self.inner
            .fail_mutations_with
            .lock()
            .unwrap()
            .clone()
            .map(|message| ApiError::Api {
                status: 500,
                message,
            })
    }
}

impl RedeemCodeGateway for FakeRedeemCodes {
    async fn list(&self) -> ApiResult<Vec<RedeemCode>> {
        self.record("list");
        if *self.inner.session_expired.lock().unwrap() {
            return Err(ApiError::SessionExpired);
        }
        Ok(self.inner.codes.lock().unwrap().clone())
    }

    async fn create(&self, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode> {
        self.record("create");
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        let mut saved = sample(100, "GEN-100", &draft.description);
        saved.duration_days = draft.duration_days;
        saved.max_uses = draft.max_uses;
        self.inner.codes.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i64, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode> {
        self.record("update");
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        let mut saved = sample(id, "GEN-EXIST", &draft.description);
        saved.duration_days = draft.duration_days;
        Ok(saved)
    }

    async fn set_active(&self, _id: i64, _active: bool) -> ApiResult<()> {
        self.record("set_active");
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.record("delete");
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        self.inner.codes.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

fn page(fake: &FakeRedeemCodes) -> RedeemCodePage<FakeRedeemCodes> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    RedeemCodePage::new(fake.clone(), Duration::from_millis(5000))
}

#[tokio::test]
async fn test_duration_zero_is_rejected_without_network() {
    let fake = FakeRedeemCodes::default();
    let mut page = page(&fake);

    page.open_create();
    page.form.update(|draft| {
        draft.description = "Promo awal tahun".to_string();
        draft.duration_days = 0;
    });
    page.submit().await;

    assert!(fake.calls().is_empty(), "no network call may be issued");
    match page.form.state() {
        FormState::Open { error, .. } => {
            assert_eq!(error.as_deref(), Some("Durasi minimal 1 hari"))
        }
        _ => panic!("modal must stay open with an inline message"),
    }
}

#[tokio::test]
async fn test_create_inserts_once_and_closes() {
    let fake = FakeRedeemCodes::seeded(vec![sample(1, "ABC-1", "Lama")]);
    let mut page = page(&fake);
    page.refresh().await;

    page.open_create();
    page.form.update(|draft| {
        draft.description = "Promo baru".to_string();
        draft.duration_days = 7;
    });
    page.submit().await;

    let visible = page.visible();
    assert_eq!(visible.iter().filter(|c| c.id == 100).count(), 1);
    assert_eq!(visible[0].id, 100, "created item shows first");
    assert!(matches!(page.form.state(), FormState::Closed));
    assert!(page.notices.current(NoticeKind::Success).is_some());
    assert_eq!(fake.calls(), vec!["list", "create"], "create patches locally");
}

#[tokio::test]
async fn test_failed_submit_preserves_draft() {
    let fake = FakeRedeemCodes::default();
    *fake.inner.fail_mutations_with.lock().unwrap() = Some("Kode duplikat".to_string());
    let mut page = page(&fake);

    page.open_create();
    page.form.update(|draft| {
        draft.description = "Promo kilat".to_string();
        draft.duration_days = 3;
        draft.max_uses = 10;
    });
    page.submit().await;

    match page.form.state() {
        FormState::Open { draft, error, .. } => {
            assert_eq!(draft.description, "Promo kilat");
            assert_eq!(draft.duration_days, 3);
            assert_eq!(draft.max_uses, 10);
            assert_eq!(error.as_deref(), Some("Kode duplikat"));
        }
        _ => panic!("modal must reopen with the draft intact"),
    }
    let notice = page.notices.current(NoticeKind::Error).expect("error notice");
    assert_eq!(notice.message, "Kode duplikat");
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let fake = FakeRedeemCodes::seeded(vec![sample(1, "ABC-1", "Satu"), sample(2, "ABC-2", "Dua")]);
    let mut page = page(&fake);
    page.refresh().await;

    // Batal: the dialog hides and nothing is deleted
    page.request_delete(1);
    page.cancel_delete();
    assert!(page.visible().iter().any(|c| c.id == 1));
    assert!(!fake.calls().contains(&"delete".to_string()));

    // Only confirming actually deletes
    page.request_delete(1);
    page.confirm_delete().await;
    assert!(page.visible().iter().all(|c| c.id != 1));
    assert_eq!(
        fake.calls().iter().filter(|c| *c == "delete").count(),
        1
    );
}

#[tokio::test]
async fn test_session_expiry_message_on_list() {
    let fake = FakeRedeemCodes::default();
    *fake.inner.session_expired.lock().unwrap() = true;
    let mut page = page(&fake);

    page.refresh().await;

    let notice = page.notices.current(NoticeKind::Error).expect("error notice");
    assert_eq!(notice.message, "Sesi telah berakhir. Silakan login kembali.");
    assert!(page.visible().is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let fake = FakeRedeemCodes::seeded(vec![sample(1, "XYZ-9", "Paket ABC eksklusif")]);
    let mut page = page(&fake);
    page.refresh().await;

    page.search_term = "abc".to_string();
    assert_eq!(page.visible().len(), 1);

    page.search_term = "qqq".to_string();
    assert!(page.visible().is_empty());
}
