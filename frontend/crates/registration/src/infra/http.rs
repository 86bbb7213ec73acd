//! HTTP Registration Service

use platform::http::ApiClient;

use crate::domain::payload::{ApplicantPayload, OrganizationPayload};
use crate::domain::service::RegistrationService;
use crate::error::RegistrationResult;

pub const APPLICANT_PATH: &str = "/auth/register/candidato";
pub const ORGANIZATION_PATH: &str = "/auth/register/empresa";

/// Registration backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpRegistrationService {
    client: ApiClient,
}

impl HttpRegistrationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl RegistrationService for HttpRegistrationService {
    async fn register_applicant(&self, payload: &ApplicantPayload) -> RegistrationResult<()> {
        self.client
            .post_json_discard(APPLICANT_PATH, payload, None)
            .await?;
        Ok(())
    }

    async fn register_organization(&self, payload: &OrganizationPayload) -> RegistrationResult<()> {
        self.client
            .post_json_discard(ORGANIZATION_PATH, payload, None)
            .await?;
        Ok(())
    }
}
