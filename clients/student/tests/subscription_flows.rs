//! Subscription page flows against an in-memory gateway

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use common::error::{ApiError, ApiResult};
use flow::notify::NoticeKind;
use student::gateway::subscriptions::SubscriptionGateway;
use student::models::{Subscription, SubscriptionStatus};
use student::pages::SubscriptionPage;

fn subscription(id: i64, class_title: &str, status: SubscriptionStatus) -> Subscription {
    Subscription {
        id,
        class_id: id * 10,
        class_title: class_title.to_string(),
        status,
        started_at: Utc::now(),
        expires_at: Utc::now() + ChronoDuration::days(30),
    }
}

#[derive(Default)]
struct Inner {
    subscriptions: Mutex<Vec<Subscription>>,
    calls: Mutex<Vec<String>>,
    reject_code: Mutex<bool>,
}

#[derive(Clone, Default)]
struct FakeSubscriptions {
    inner: Arc<Inner>,
}

impl FakeSubscriptions {
    fn seeded(subscriptions: Vec<Subscription>) -> Self {
        let fake = Self::default();
        *fake.inner.subscriptions.lock().unwrap() = subscriptions;
        fake
    }

    fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.inner.calls.lock().unwrap().push(call.to_string());
    }
}

impl SubscriptionGateway for FakeSubscriptions {
    async fn list(&self) -> ApiResult<Vec<Subscription>> {
        self.record("list");
        Ok(self.inner.subscriptions.lock().unwrap().clone())
    }

    async fn subscribe(&self, class_id: i64) -> ApiResult<Subscription> {
        self.record("subscribe");
        let mut saved = subscription(77, "Kelas Baru", SubscriptionStatus::Active);
        saved.class_id = class_id;
        self.inner.subscriptions.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn cancel(&self, id: i64) -> ApiResult<Subscription> {
        self.record("cancel");
        let mut subscriptions = self.inner.subscriptions.lock().unwrap();
        let target = subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::NotFound("Langganan tidak ditemukan".to_string()))?;
        target.status = SubscriptionStatus::Cancelled;
        Ok(target.clone())
    }

    async fn redeem(&self, _code: &str) -> ApiResult<Option<String>> {
        self.record("redeem");
        if *self.inner.reject_code.lock().unwrap() {
            return Err(ApiError::Api {
                status: 422,
                message: "Kode sudah kedaluwarsa".to_string(),
            });
        }
        // What the code granted materializes as a new subscription
        self.inner.subscriptions.lock().unwrap().push(subscription(
            88,
            "Kelas Bonus",
            SubscriptionStatus::Active,
        ));
        Ok(Some("Kode memberi akses 30 hari".to_string()))
    }
}

fn page(fake: &FakeSubscriptions) -> SubscriptionPage<FakeSubscriptions> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    SubscriptionPage::new(fake.clone(), Duration::from_millis(5000))
}

#[tokio::test]
async fn test_cancel_flips_status_without_removing_row() {
    let fake = FakeSubscriptions::seeded(vec![subscription(
        1,
        "Kelas Kimia",
        SubscriptionStatus::Active,
    )]);
    let mut page = page(&fake);
    page.refresh().await;

    // Dismissing the dialog changes nothing
    page.request_cancel(1);
    page.dismiss_cancel();
    assert!(!fake.calls().contains(&"cancel".to_string()));
    assert_eq!(page.list.items()[0].status, SubscriptionStatus::Active);

    page.request_cancel(1);
    page.confirm_cancel().await;

    let items = page.list.items();
    assert_eq!(items.len(), 1, "the row stays after cancelling");
    assert_eq!(items[0].status, SubscriptionStatus::Cancelled);
    assert!(page.notices.current(NoticeKind::Success).is_some());
}

#[tokio::test]
async fn test_redeem_refetches_and_clears_entry() {
    let fake = FakeSubscriptions::seeded(vec![subscription(
        1,
        "Kelas Kimia",
        SubscriptionStatus::Active,
    )]);
    let mut page = page(&fake);
    page.refresh().await;

    page.redeem_entry = " PROMO-2026 ".to_string();
    page.apply_redeem().await;

    assert_eq!(
        fake.calls(),
        vec!["list", "redeem", "list"],
        "redeeming re-fetches server state"
    );
    assert!(page.redeem_entry.is_empty());
    assert_eq!(page.list.items().len(), 2, "granted access shows up");
    assert_eq!(
        page.notices.current(NoticeKind::Success).unwrap().message,
        "Kode memberi akses 30 hari"
    );
}

#[tokio::test]
async fn test_empty_redeem_entry_never_reaches_network() {
    let fake = FakeSubscriptions::default();
    let mut page = page(&fake);

    page.redeem_entry = "   ".to_string();
    page.apply_redeem().await;

    assert!(fake.calls().is_empty());
    assert_eq!(
        page.notices.current(NoticeKind::Error).unwrap().message,
        "Kode wajib diisi"
    );
}

#[tokio::test]
async fn test_rejected_code_keeps_entry_and_list() {
    let fake = FakeSubscriptions::default();
    *fake.inner.reject_code.lock().unwrap() = true;
    let mut page = page(&fake);

    page.redeem_entry = "BASI-2020".to_string();
    page.apply_redeem().await;

    assert_eq!(fake.calls(), vec!["redeem"], "no re-fetch on failure");
    assert_eq!(page.redeem_entry, "BASI-2020");
    assert_eq!(
        page.notices.current(NoticeKind::Error).unwrap().message,
        "Kode sudah kedaluwarsa"
    );
}
