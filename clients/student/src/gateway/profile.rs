//! Profile endpoints

use common::error::ApiResult;
use common::http::{ApiClient, FilePart, Payload};
use reqwest::Method;

use crate::models::{Profile, ProfileDraft};

/// Gateway to the profile endpoints
pub trait ProfileGateway {
    async fn get(&self) -> ApiResult<Profile>;
    async fn update(&self, draft: &ProfileDraft) -> ApiResult<Profile>;
    async fn upload_avatar(&self, part: FilePart) -> ApiResult<Profile>;
}

/// Profile gateway backed by the REST backend
#[derive(Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ProfileGateway for ProfileApi {
    async fn get(&self) -> ApiResult<Profile> {
        self.client
            .request(Method::GET, "/student/profile", Payload::None)
            .await
    }

    async fn update(&self, draft: &ProfileDraft) -> ApiResult<Profile> {
        self.client
            .request(Method::PUT, "/student/profile", Payload::json(draft)?)
            .await
    }

    async fn upload_avatar(&self, part: FilePart) -> ApiResult<Profile> {
        self.client
            .request(
                Method::POST,
                "/student/profile/avatar",
                Payload::Multipart(part),
            )
            .await
    }
}
