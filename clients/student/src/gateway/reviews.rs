//! Own-review endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::{Review, ReviewDraft};

/// Gateway to the signed-in student's review endpoints
pub trait ReviewGateway {
    async fn list(&self) -> ApiResult<Vec<Review>>;
    async fn create(&self, draft: &ReviewDraft) -> ApiResult<Review>;
    async fn update(&self, id: i64, draft: &ReviewDraft) -> ApiResult<Review>;
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
            .request(Method::GET, "/student/reviews", Payload::None)
            .await
    }

    async fn create(&self, draft: &ReviewDraft) -> ApiResult<Review> {
        self.client
            .request(Method::POST, "/student/reviews", Payload::json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &ReviewDraft) -> ApiResult<Review> {
        self.client
            .request(
                Method::PUT,
                &format!("/student/reviews/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(
                Method::DELETE,
                &format!("/student/reviews/{}", id),
                Payload::None,
            )
            .await
            .map(|_| ())
    }
}
