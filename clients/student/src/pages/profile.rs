//! Profile page

use std::time::Duration;

use common::http::FilePart;
use flow::form::{FormController, FormMode};
use flow::notify::{NoticeKind, Notices};

use crate::gateway::profile::ProfileGateway;
use crate::models::{Profile, ProfileDraft};

/// Controller of the profile screen
///
/// There is no list here; the page holds the single profile record and the
/// edit form over it. The avatar upload goes through its own endpoint and
/// replaces the record with what the server stored.
pub struct ProfilePage<G: ProfileGateway> {
    gateway: G,
    pub profile: Option<Profile>,
    pub form: FormController<ProfileDraft>,
    pub notices: Notices,
    pub loading: bool,
}

impl<G: ProfileGateway> ProfilePage<G> {
    pub fn new(gateway: G, notification_ttl: Duration) -> Self {
        Self {
            gateway,
            profile: None,
            form: FormController::new(),
            notices: Notices::new(notification_ttl),
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.gateway.get().await {
            Ok(profile) => {
                self.profile = Some(profile);
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
        self.loading = false;
    }

    /// Open the edit form seeded from the loaded profile
    pub fn open_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.form.open_edit(profile.into());
        }
    }

    pub async fn submit(&mut self) {
        let (mode, draft) = match self.form.begin_submit() {
            Ok(prepared) => prepared,
            Err(_) => return,
        };

        // Only Edit exists here; the profile is never created by the client
        debug_assert_eq!(mode, FormMode::Edit);

        match self.gateway.update(&draft).await {
            Ok(saved) => {
                self.form.submit_succeeded();
                self.profile = Some(saved);
                self.notices
                    .push(NoticeKind::Success, "Profil berhasil diperbarui");
            }
            Err(e) => {
                self.form.submit_failed(e.to_string());
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }

    /// Upload a new profile image
    pub async fn upload_avatar(&mut self, file_name: String, mime_type: String, bytes: Vec<u8>) {
        let part = FilePart {
            field: "profileImage".to_string(),
            file_name,
            mime_type,
            bytes,
        };

        match self.gateway.upload_avatar(part).await {
            Ok(saved) => {
                self.profile = Some(saved);
                self.notices
                    .push(NoticeKind::Success, "Foto profil diperbarui");
            }
            Err(e) => {
                self.notices.push(NoticeKind::Error, e.to_string());
            }
        }
    }
}
