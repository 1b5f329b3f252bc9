//! Section endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::{Section, SectionDraft};

/// Gateway to the section endpoints
pub trait SectionGateway {
    async fn list(&self, class_id: i64) -> ApiResult<Vec<Section>>;
    async fn create(&self, class_id: i64, draft: &SectionDraft) -> ApiResult<Section>;
    async fn update(&self, id: i64, draft: &SectionDraft) -> ApiResult<Section>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Section gateway backed by the REST backend
#[derive(Clone)]
pub struct SectionApi {
    client: ApiClient,
}

impl SectionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl SectionGateway for SectionApi {
    async fn list(&self, class_id: i64) -> ApiResult<Vec<Section>> {
        self.client
            .request(
                Method::GET,
                &format!("/classes/{}/sections", class_id),
                Payload::None,
            )
            .await
    }

    async fn create(&self, class_id: i64, draft: &SectionDraft) -> ApiResult<Section> {
        self.client
            .request(
                Method::POST,
                &format!("/classes/{}/sections", class_id),
                Payload::json(draft)?,
            )
            .await
    }

    // The update endpoint only accepts form encoding, unlike create.
    async fn update(&self, id: i64, draft: &SectionDraft) -> ApiResult<Section> {
        self.client
            .request(
                Method::PUT,
                &format!("/sections/{}", id),
                Payload::Form(vec![
                    ("title".to_string(), draft.title.clone()),
                    ("description".to_string(), draft.description.clone()),
                    ("position".to_string(), draft.position.to_string()),
                ]),
            )
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/sections/{}", id), Payload::None)
            .await
            .map(|_| ())
    }
}
