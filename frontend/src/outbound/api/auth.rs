//! Auth gateway backed by the backend REST API.

use async_trait::async_trait;

use super::dto::{LoginPayload, LoginResponseDto, RegisterPayload};
use super::ApiClient;
use crate::domain::auth::{Credentials, Registration};
use crate::domain::ports::{AuthGateway, GatewayError, GatewayResult};
use crate::domain::user::User;

pub struct ApiAuthGateway {
    api: ApiClient,
}

impl ApiAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for ApiAuthGateway {
    async fn login(&self, credentials: &Credentials) -> GatewayResult<User> {
        let url = self.api.endpoint("api/auth/login")?;
        let payload = LoginPayload {
            email: &credentials.email,
            password: &credentials.password,
        };
        let response: LoginResponseDto = self.api.post_json(url, &payload).await?;
        // A 2xx with no user payload still means the credentials were refused.
        let user = response.user.ok_or(GatewayError::Unauthorized)?;
        user.into_domain_user()
            .map_err(|message| GatewayError::Decode { message })
    }

    async fn register(&self, registration: &Registration) -> GatewayResult<()> {
        let url = self.api.endpoint("api/auth/register")?;
        let payload = RegisterPayload {
            display_name: &registration.display_name,
            email: &registration.email,
            password: &registration.password,
        };
        self.api.post_unit(url, &payload).await
    }

    async fn logout(&self) -> GatewayResult<()> {
        let url = self.api.endpoint("api/auth/logout")?;
        self.api.post_empty(url).await
    }
}
