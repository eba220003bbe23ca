//! Jobs gateway backed by the backend REST API.

use async_trait::async_trait;
use reqwest::Url;

use super::dto::{IdEnvelope, JobEnvelope, JobListEnvelope, JobPayload};
use super::ApiClient;
use crate::domain::job::{Job, JobDraft};
use crate::domain::ports::{GatewayError, GatewayResult, JobPage, JobQuery, JobsGateway};

pub struct ApiJobsGateway {
    api: ApiClient,
}

impl ApiJobsGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn listing_url(&self, query: &JobQuery) -> GatewayResult<Url> {
        let mut url = self.api.endpoint("api/jobs")?;
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = query.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = query.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(search) = query.search.as_deref() {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(location) = query.location.as_deref() {
            pairs.push(("location", location.to_owned()));
        }
        if let Some(capability) = query.capability.as_deref() {
            pairs.push(("capability", capability.to_owned()));
        }
        if let Some(band) = query.band.as_deref() {
            pairs.push(("band", band.to_owned()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

fn decode_error(message: String) -> GatewayError {
    GatewayError::Decode { message }
}

fn map_jobs(dtos: Vec<super::dto::JobDto>) -> GatewayResult<Vec<Job>> {
    dtos.into_iter()
        .map(|dto| dto.into_domain_job().map_err(decode_error))
        .collect()
}

#[async_trait]
impl JobsGateway for ApiJobsGateway {
    async fn list(&self, query: &JobQuery) -> GatewayResult<JobPage> {
        let url = self.listing_url(query)?;
        let envelope: JobListEnvelope = self.api.get_json(url).await?;
        let (dtos, total) = envelope.into_parts();
        let jobs = map_jobs(dtos)?;
        // Backends without paging return the whole list and no total.
        let total =
            total.unwrap_or_else(|| u32::try_from(jobs.len()).unwrap_or(u32::MAX));
        Ok(JobPage { jobs, total })
    }

    async fn all(&self) -> GatewayResult<Vec<Job>> {
        let url = self.api.endpoint("api/jobs")?;
        let envelope: JobListEnvelope = self.api.get_json(url).await?;
        let (dtos, _) = envelope.into_parts();
        map_jobs(dtos)
    }

    async fn get(&self, id: i64) -> GatewayResult<Job> {
        let url = self.api.endpoint(&format!("api/jobs/{id}"))?;
        let envelope: JobEnvelope = self.api.get_json(url).await?;
        envelope.into_inner().into_domain_job().map_err(decode_error)
    }

    async fn create(&self, draft: &JobDraft) -> GatewayResult<i64> {
        let url = self.api.endpoint("api/jobs")?;
        let envelope: IdEnvelope = self
            .api
            .post_json(url, &JobPayload::from(draft))
            .await?;
        Ok(envelope.id())
    }

    async fn update(&self, id: i64, draft: &JobDraft) -> GatewayResult<()> {
        let url = self.api.endpoint(&format!("api/jobs/{id}"))?;
        self.api.put_unit(url, &JobPayload::from(draft)).await
    }

    async fn delete(&self, id: i64) -> GatewayResult<()> {
        let url = self.api.endpoint(&format!("api/jobs/{id}"))?;
        self.api.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gateway() -> ApiJobsGateway {
        let base = Url::parse("http://backend.test:8080/").expect("valid base");
        ApiJobsGateway::new(ApiClient::new(base, Duration::from_secs(5)).expect("client builds"))
    }

    #[test]
    fn listing_url_carries_only_set_filters() {
        let query = JobQuery {
            limit: Some(10),
            offset: Some(20),
            search: Some("engineer".to_owned()),
            ..JobQuery::default()
        };
        let url = gateway().listing_url(&query).expect("builds");
        assert_eq!(
            url.as_str(),
            "http://backend.test:8080/api/jobs?limit=10&offset=20&search=engineer"
        );
    }

    #[test]
    fn an_empty_query_adds_no_parameters() {
        let url = gateway()
            .listing_url(&JobQuery::default())
            .expect("builds");
        assert_eq!(url.as_str(), "http://backend.test:8080/api/jobs");
    }
}
