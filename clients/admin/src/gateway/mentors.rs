//! Mentor (teacher account) endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;
use serde_json::json;

use crate::models::{Mentor, MentorDraft};

/// Gateway to the mentor-management endpoints
pub trait MentorGateway {
    async fn list(&self) -> ApiResult<Vec<Mentor>>;
    async fn create(&self, draft: &MentorDraft) -> ApiResult<Mentor>;
    async fn update(&self, id: i64, draft: &MentorDraft) -> ApiResult<Mentor>;
    async fn set_active(&self, id: i64, active: bool) -> ApiResult<()>;
}

/// Mentor gateway backed by the REST backend
#[derive(Clone)]
pub struct MentorApi {
    client: ApiClient,
}

impl MentorApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl MentorGateway for MentorApi {
    async fn list(&self) -> ApiResult<Vec<Mentor>> {
        self.client
            .request(Method::GET, "/admin/mentors", Payload::None)
            .await
    }

    async fn create(&self, draft: &MentorDraft) -> ApiResult<Mentor> {
        self.client
            .request(Method::POST, "/admin/mentors", Payload::json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &MentorDraft) -> ApiResult<Mentor> {
        self.client
            .request(
                Method::PUT,
                &format!("/admin/mentors/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn set_active(&self, id: i64, active: bool) -> ApiResult<()> {
        self.client
            .execute(
                Method::PATCH,
                &format!("/admin/mentors/{}/status", id),
                Payload::Json(json!({ "active": active })),
            )
            .await
            .map(|_| ())
    }
}
