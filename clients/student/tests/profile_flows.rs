//! Profile page flows, including the avatar upload

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use common::error::ApiResult;
use common::http::FilePart;
use flow::form::FormState;
use flow::notify::NoticeKind;
use student::gateway::profile::ProfileGateway;
use student::models::{Profile, ProfileDraft};
use student::pages::ProfilePage;

fn profile() -> Profile {
    Profile {
        id: 1,
        name: "Siti Rahma".to_string(),
        email: "siti@kelasku.id".to_string(),
        phone: "08123456789".to_string(),
        bio: String::new(),
        avatar_url: None,
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
struct Inner {
    profile: Mutex<Option<Profile>>,
    uploaded: Mutex<Vec<FilePart>>,
}

#[derive(Clone, Default)]
struct FakeProfile {
    inner: Arc<Inner>,
}

impl FakeProfile {
    fn seeded() -> Self {
        let fake = Self::default();
        *fake.inner.profile.lock().unwrap() = Some(profile());
        fake
    }
}

impl ProfileGateway for FakeProfile {
    async fn get(&self) -> ApiResult<Profile> {
        Ok(self.inner.profile.lock().unwrap().clone().unwrap())
    }

    async fn update(&self, draft: &ProfileDraft) -> ApiResult<Profile> {
        let mut guard = self.inner.profile.lock().unwrap();
        let mut saved = guard.clone().unwrap();
        saved.name = draft.name.clone();
        saved.phone = draft.phone.clone();
        saved.bio = draft.bio.clone();
        *guard = Some(saved.clone());
        Ok(saved)
    }

    async fn upload_avatar(&self, part: FilePart) -> ApiResult<Profile> {
        let file_name = part.file_name.clone();
        self.inner.uploaded.lock().unwrap().push(part);
        let mut guard = self.inner.profile.lock().unwrap();
        let mut saved = guard.clone().unwrap();
        saved.avatar_url = Some(format!("https://cdn.kelasku.id/avatars/{}", file_name));
        *guard = Some(saved.clone());
        Ok(saved)
    }
}

#[tokio::test]
async fn test_edit_keeps_email_out_of_the_draft() {
    let fake = FakeProfile::seeded();
    let mut page = ProfilePage::new(fake.clone(), Duration::from_millis(5000));
    page.refresh().await;

    page.open_edit();
    match page.form.state() {
        FormState::Open { draft, .. } => {
            assert_eq!(draft.name, "Siti Rahma");
        }
        _ => panic!("form must be open"),
    }

    page.form.update(|draft| draft.name = "Siti Rahma Dewi".to_string());
    page.submit().await;

    let saved = page.profile.as_ref().unwrap();
    assert_eq!(saved.name, "Siti Rahma Dewi");
    assert_eq!(saved.email, "siti@kelasku.id", "email is never touched");
    assert!(matches!(page.form.state(), FormState::Closed));
}

#[tokio::test]
async fn test_empty_name_is_rejected_locally() {
    let fake = FakeProfile::seeded();
    let mut page = ProfilePage::new(fake.clone(), Duration::from_millis(5000));
    page.refresh().await;

    page.open_edit();
    page.form.update(|draft| draft.name = " ".to_string());
    page.submit().await;

    match page.form.state() {
        FormState::Open { error, .. } => {
            assert_eq!(error.as_deref(), Some("Nama wajib diisi"))
        }
        _ => panic!("form must stay open"),
    }
    assert_eq!(page.profile.as_ref().unwrap().name, "Siti Rahma");
}

#[test]
fn test_avatar_upload_uses_the_profile_image_field() {
    tokio_test::block_on(async {
        let fake = FakeProfile::seeded();
        let mut page = ProfilePage::new(fake.clone(), Duration::from_millis(5000));
        page.refresh().await;

        page.upload_avatar(
            "foto.png".to_string(),
            "image/png".to_string(),
            vec![0x89, 0x50, 0x4e, 0x47],
        )
        .await;

        let uploaded = fake.inner.uploaded.lock().unwrap();
        assert_eq!(uploaded.len(), 1);
        assert_eq!(uploaded[0].field, "profileImage");
        assert_eq!(uploaded[0].mime_type, "image/png");

        assert_eq!(
            page.profile.as_ref().unwrap().avatar_url.as_deref(),
            Some("https://cdn.kelasku.id/avatars/foto.png")
        );
        assert!(page.notices.current(NoticeKind::Success).is_some());
    });
}
