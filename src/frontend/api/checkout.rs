use super::ApiClient;
use crate::{
    common::{
        checkout::{GetSessionStatusParams, SessionId, SessionStatus, SessionStatusResponse},
        confirmation::SessionVerifier,
    },
    frontend::utils::errors::{FrontendError, FrontendResult},
};

impl ApiClient {
    pub async fn get_session_status(
        &self,
        params: &GetSessionStatusParams,
    ) -> FrontendResult<SessionStatusResponse> {
        self.post("/api/v1/checkout/session_status", params).await
    }
}

impl SessionVerifier for ApiClient {
    type Error = FrontendError;

    async fn verify_session(&self, session_id: &SessionId) -> FrontendResult<SessionStatus> {
        let params = GetSessionStatusParams {
            session_id: session_id.clone(),
        };
        Ok(self.get_session_status(&params).await?.status)
    }
}
