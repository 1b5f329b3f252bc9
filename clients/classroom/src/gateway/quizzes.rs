//! Quiz endpoints

use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::{Quiz, QuizDraft};

/// Gateway to the quiz endpoints
pub trait QuizGateway {
    async fn list(&self, section_id: i64) -> ApiResult<Vec<Quiz>>;
    async fn create(&self, section_id: i64, draft: &QuizDraft) -> ApiResult<Quiz>;
    async fn update(&self, id: i64, draft: &QuizDraft) -> ApiResult<Quiz>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Quiz gateway backed by the REST backend
#[derive(Clone)]
pub struct QuizApi {
    client: ApiClient,
}

impl QuizApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl QuizGateway for QuizApi {
    async fn list(&self, section_id: i64) -> ApiResult<Vec<Quiz>> {
        self.client
            .request(
                Method::GET,
                &format!("/sections/{}/quizzes", section_id),
                Payload::None,
            )
            .await
    }

    async fn create(&self, section_id: i64, draft: &QuizDraft) -> ApiResult<Quiz> {
        self.client
            .request(
                Method::POST,
                &format!("/sections/{}/quizzes", section_id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn update(&self, id: i64, draft: &QuizDraft) -> ApiResult<Quiz> {
        self.client
            .request(
                Method::PUT,
                &format!("/quizzes/{}", id),
                Payload::json(draft)?,
            )
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute(Method::DELETE, &format!("/quizzes/{}", id), Payload::None)
            .await
            .map(|_| ())
    }
}
