//! Subscription and redeem endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;
use serde_json::json;

use crate::models::Subscription;

/// Gateway to the subscription endpoints
pub trait SubscriptionGateway {
    async fn list(&self) -> ApiResult<Vec<Subscription>>;
    async fn subscribe(&self, class_id: i64) -> ApiResult<Subscription>;
    async fn cancel(&self, id: i64) -> ApiResult<Subscription>;
    /// Apply a redeem code; the envelope message says what it granted
    async fn redeem(&self, code: &str) -> ApiResult<Option<String>>;
}

/// Subscription gateway backed by the REST backend
#[derive(Clone)]
pub struct SubscriptionApi {
    client: ApiClient,
}

impl SubscriptionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl SubscriptionGateway for SubscriptionApi {
    async fn list(&self) -> ApiResult<Vec<Subscription>> {
        self.client
            .request(Method::GET, "/student/subscriptions", Payload::None)
            .await
    }

    async fn subscribe(&self, class_id: i64) -> ApiResult<Subscription> {
        self.client
            .request(
                Method::POST,
                "/student/subscriptions",
                Payload::Json(json!({ "classId": class_id })),
            )
            .await
    }

    async fn cancel(&self, id: i64) -> ApiResult<Subscription> {
        self.client
            .request(
                Method::PATCH,
                &format!("/student/subscriptions/{}/cancel", id),
                Payload::None,
            )
            .await
    }

    async fn redeem(&self, code: &str) -> ApiResult<Option<String>> {
        self.client
            .execute(
                Method::POST,
                "/student/redeem",
                Payload::Json(json!({ "code": code })),
            )
            .await
    }
}
