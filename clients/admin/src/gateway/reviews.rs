//! Review moderation endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;
use serde_json::json;

use crate::models::Review;

/// Gateway to the review-moderation endpoints
pub trait ReviewGateway {
    async fn list(&self) -> ApiResult<Vec<Review>>;
    async fn set_approved(&self, id: i64, approved: bool) -> ApiResult<()>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Review gateway backed by the REST backend
#[derive(Clone)]
pub struct ReviewApi {
    client: ApiClient,
}

impl ReviewApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ReviewGateway for ReviewApi {
    async fn list(&self) -> ApiResult<Vec<Review>> {
        self.client
            .request(Method::GET, "/admin/reviews", Payload::None)
            .await
    }

    async fn set_approved(&self, id: i64, approved: bool) -> ApiResult<()> {
        self.client
            .execute(
                Method::PATCH,
                &format!("/admin/reviews/{}/approval", id),
                Payload::Json(json!({ "approved": approved })),
            )
            .await
            .map(|_| ())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(
                Method::DELETE,
                &format!("/admin/reviews/{}", id),
                Payload::None,
            )
            .await
            .map(|_| ())
    }
}
