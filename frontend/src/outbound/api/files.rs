//! CV download proxy backed by the backend's upload store.

use async_trait::async_trait;
use reqwest::header;

use super::{map_transport_error, ApiClient};
use crate::domain::ports::{CvDownloads, CvFile, GatewayResult};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub struct ApiCvDownloads {
    api: ApiClient,
}

impl ApiCvDownloads {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CvDownloads for ApiCvDownloads {
    async fn fetch(&self, year: &str, month: &str, filename: &str) -> GatewayResult<CvFile> {
        let url = self
            .api
            .endpoint(&format!("uploads/cvs/{year}/{month}/{filename}"))?;
        let response = self.api.get_raw(url).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_owned();
        let content_disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(CvFile {
            content_type,
            content_disposition,
            bytes: bytes.to_vec(),
        })
    }
}
