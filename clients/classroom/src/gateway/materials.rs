//! Material endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::{Material, MaterialDraft};

/// Gateway to the material endpoints
pub trait MaterialGateway {
    async fn list(&self, section_id: i64) -> ApiResult<Vec<Material>>;
    async fn create(&self, section_id: i64, draft: &MaterialDraft) -> ApiResult<Material>;
    async fn update(&self, id: i64, draft: &MaterialDraft) -> ApiResult<Material>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Material gateway backed by the REST backend
#[derive(Clone)]
pub struct MaterialApi {
    client: ApiClient,
}

impl MaterialApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl MaterialGateway for MaterialApi {
    async fn list(&self, section_id: i64) -> ApiResult<Vec<Material>> {
        self.client
            .request(
                Method::GET,
                &format!("/sections/{}/materials", section_id),
                Payload::None,
            )
            .await
    }

    async fn create(&self, section_id: i64, draft: &MaterialDraft) -> ApiResult<Material> {
        self.client
            .request(
                Method::POST,
                &format!("/sections/{}/materials", section_id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn update(&self, id: i64, draft: &MaterialDraft) -> ApiResult<Material> {
        self.client
            .request(
                Method::PUT,
                &format!("/materials/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/materials/{}", id), Payload::None)
            .await
            .map(|_| ())
    }
}
