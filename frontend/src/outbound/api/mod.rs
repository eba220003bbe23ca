//! Reqwest-backed gateway adapters.
//!
//! These adapters own transport details only: URL construction, timeout and
//! HTTP status mapping, and JSON decoding into domain types. Everything else
//! lives behind the port traits in `domain::ports`.

mod applications;
mod auth;
mod dto;
mod files;
mod jobs;

pub use applications::ApiApplicationsGateway;
pub use auth::ApiAuthGateway;
pub use files::ApiCvDownloads;
pub use jobs::ApiJobsGateway;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::{GatewayError, GatewayResult};

/// Shared HTTP client for every backend adapter.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    /// Resolve a path relative to the configured base URL.
    fn endpoint(&self, path: &str) -> GatewayResult<Url> {
        self.base.join(path).map_err(|error| GatewayError::Transport {
            message: format!("invalid endpoint {path}: {error}"),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> GatewayResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_json(response).await
    }

    async fn post_unit<B: Serialize + Sync>(&self, url: Url, body: &B) -> GatewayResult<()> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        expect_success(&response)
    }

    async fn post_empty(&self, url: Url) -> GatewayResult<()> {
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        expect_success(&response)
    }

    async fn put_unit<B: Serialize + Sync>(&self, url: Url, body: &B) -> GatewayResult<()> {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        expect_success(&response)
    }

    async fn delete(&self, url: Url) -> GatewayResult<()> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        expect_success(&response)
    }

    /// GET returning the raw response, for byte passthrough.
    async fn get_raw(&self, url: Url) -> GatewayResult<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        expect_success(&response)?;
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    expect_success(&response)?;
    let body = response.bytes().await.map_err(map_transport_error)?;
    serde_json::from_slice(&body).map_err(|error| GatewayError::Decode {
        message: format!("invalid JSON payload: {error}"),
    })
}

fn expect_success(response: &Response) -> GatewayResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(map_status(status))
    }
}

fn map_status(status: StatusCode) -> GatewayError {
    match status {
        StatusCode::NOT_FOUND => GatewayError::NotFound,
        StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
        StatusCode::CONFLICT => GatewayError::Conflict,
        _ => GatewayError::Backend {
            status: status.as_u16(),
        },
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout {
            message: error.to_string(),
        }
    } else {
        GatewayError::Transport {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND, "NotFound")]
    #[case::unauthorized(StatusCode::UNAUTHORIZED, "Unauthorized")]
    #[case::conflict(StatusCode::CONFLICT, "Conflict")]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY, "Backend")]
    fn maps_http_statuses_to_gateway_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status(status);
        match expected {
            "NotFound" => assert!(matches!(error, GatewayError::NotFound)),
            "Unauthorized" => assert!(matches!(error, GatewayError::Unauthorized)),
            "Conflict" => assert!(matches!(error, GatewayError::Conflict)),
            "Backend" => {
                assert!(matches!(error, GatewayError::Backend { status: 502 }));
            }
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn endpoint_joins_against_the_base() {
        let base = Url::parse("http://backend.test:8080/").expect("valid base");
        let api = ApiClient::new(base, Duration::from_secs(5)).expect("client builds");
        let url = api.endpoint("api/jobs/7").expect("joins");
        assert_eq!(url.as_str(), "http://backend.test:8080/api/jobs/7");
    }
}
