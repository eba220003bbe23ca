//! Applications gateway backed by the backend REST API.

use async_trait::async_trait;

use super::dto::{ApplicationDto, DataEnvelope, NewApplicationPayload, ReviewPayload};
use super::ApiClient;
use crate::domain::application::{Application, NewApplication, ReviewDecision};
use crate::domain::ports::{ApplicationsGateway, GatewayError, GatewayResult};

pub struct ApiApplicationsGateway {
    api: ApiClient,
}

impl ApiApplicationsGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn fetch_one(&self, path: &str) -> GatewayResult<Application> {
        let url = self.api.endpoint(path)?;
        let envelope: DataEnvelope<ApplicationDto> = self.api.get_json(url).await?;
        envelope
            .data
            .into_domain_application()
            .map_err(|message| GatewayError::Decode { message })
    }

    async fn fetch_many(&self, path: &str) -> GatewayResult<Vec<Application>> {
        let url = self.api.endpoint(path)?;
        let envelope: DataEnvelope<Vec<ApplicationDto>> = self.api.get_json(url).await?;
        envelope
            .data
            .into_iter()
            .map(|dto| {
                dto.into_domain_application()
                    .map_err(|message| GatewayError::Decode { message })
            })
            .collect()
    }
}

#[async_trait]
impl ApplicationsGateway for ApiApplicationsGateway {
    async fn get(&self, id: i64) -> GatewayResult<Application> {
        self.fetch_one(&format!("api/applications/{id}")).await
    }

    async fn for_job(&self, job_id: i64) -> GatewayResult<Vec<Application>> {
        self.fetch_many(&format!("api/applications/job/{job_id}"))
            .await
    }

    async fn for_user(&self, user_id: i64) -> GatewayResult<Vec<Application>> {
        self.fetch_many(&format!("api/applications/user/{user_id}"))
            .await
    }

    async fn for_user_and_job(
        &self,
        user_id: i64,
        job_id: i64,
    ) -> GatewayResult<Option<Application>> {
        match self
            .fetch_one(&format!("api/applications/user/{user_id}/job/{job_id}"))
            .await
        {
            Ok(application) => Ok(Some(application)),
            Err(GatewayError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn submit(&self, application: &NewApplication) -> GatewayResult<i64> {
        let url = self.api.endpoint("api/applications")?;
        let envelope: DataEnvelope<ApplicationDto> = self
            .api
            .post_json(url, &NewApplicationPayload::from(application))
            .await?;
        Ok(envelope.data.id)
    }

    async fn review(&self, id: i64, decision: ReviewDecision, notes: &str) -> GatewayResult<()> {
        let action = match decision {
            ReviewDecision::Accept => "hire",
            ReviewDecision::Reject => "reject",
        };
        let url = self.api.endpoint(&format!("api/applications/{id}/{action}"))?;
        self.api.put_unit(url, &ReviewPayload { notes }).await
    }
}
