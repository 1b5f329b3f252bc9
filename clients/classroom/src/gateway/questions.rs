//! Quiz question endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::{Question, QuestionDraft};

/// Gateway to the question endpoints
pub trait QuestionGateway {
    async fn list(&self, quiz_id: i64) -> ApiResult<Vec<Question>>;
    async fn create(&self, quiz_id: i64, draft: &QuestionDraft) -> ApiResult<Question>;
    async fn update(&self, id: i64, draft: &QuestionDraft) -> ApiResult<Question>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Question gateway backed by the REST backend
#[derive(Clone)]
pub struct QuestionApi {
    client: ApiClient,
}

impl QuestionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl QuestionGateway for QuestionApi {
    async fn list(&self, quiz_id: i64) -> ApiResult<Vec<Question>> {
        self.client
            .request(
                Method::GET,
                &format!("/quizzes/{}/questions", quiz_id),
                Payload::None,
            )
            .await
    }

    async fn create(&self, quiz_id: i64, draft: &QuestionDraft) -> ApiResult<Question> {
        self.client
            .request(
                Method::POST,
                &format!("/quizzes/{}/questions", quiz_id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn update(&self, id: i64, draft: &QuestionDraft) -> ApiResult<Question> {
        self.client
            .request(
                Method::PUT,
                &format!("/questions/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/questions/{}", id), Payload::None)
            .await
            .map(|_| ())
    }
}
