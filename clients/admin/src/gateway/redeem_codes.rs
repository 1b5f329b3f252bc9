//! Redeem-code endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;
use serde_json::json;

use crate::models::{RedeemCode, RedeemCodeDraft};

/// Gateway to the redeem-code endpoints
pub trait RedeemCodeGateway {
    async fn list(&self) -> ApiResult<Vec<RedeemCode>>;
    async fn create(&self, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode>;
    async fn update(&self, id: i64, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode>;
    async fn set_active(&self, id: i64, active: bool) -> ApiResult<()>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Redeem-code gateway backed by the REST backend
#[derive(Clone)]
pub struct RedeemCodeApi {
    client: ApiClient,
}

impl RedeemCodeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl RedeemCodeGateway for RedeemCodeApi {
    async fn list(&self) -> ApiResult<Vec<RedeemCode>> {
        self.client
            .request(Method::GET, "/admin/redeem-codes", Payload::None)
            .await
    }

    async fn create(&self, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode> {
        self.client
            .request(Method::POST, "/admin/redeem-codes", Payload::json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &RedeemCodeDraft) -> ApiResult<RedeemCode> {
        self.client
            .request(
                Method::PUT,
                &format!("/admin/redeem-codes/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn set_active(&self, id: i64, active: bool) -> ApiResult<()> {
        self.client
            .execute(
                Method::PATCH,
                &format!("/admin/redeem-codes/{}/status", id),
                Payload::Json(json!({ "active": active })),
            )
            .await
            .map(|_| ())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(
                Method::DELETE,
                &format!("/admin/redeem-codes/{}", id),
                Payload::None,
            )
            .await
            .map(|_| ())
    }
}
