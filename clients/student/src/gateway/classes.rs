//! Class catalog endpoints

use common::envelope::PageMeta;
use common::error::ApiResult;
use common::http::{ApiClient, Payload};
use reqwest::Method;

use crate::models::ClassSummary;

/// Gateway to the class catalog
pub trait ClassGateway {
    async fn list(&self, page: u32) -> ApiResult<(Vec<ClassSummary>, Option<PageMeta>)>;
}

/// Class catalog gateway backed by the REST backend
#[derive(Clone)]
pub struct ClassApi {
    client: ApiClient,
}

impl ClassApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ClassGateway for ClassApi {
    async fn list(&self, page: u32) -> ApiResult<(Vec<ClassSummary>, Option<PageMeta>)> {
        self.client
            .request_with_meta(
                Method::GET,
                &format!("/classes?page={}", page),
                Payload::None,
            )
            .await
    }
}
