use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Query parameter which the payment provider appends to the success url.
pub const SESSION_ID_PARAM: &str = "session_id";

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/";

/// Opaque identifier of a checkout session, passed through exactly as received.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionStatusParams {
    pub session_id: SessionId,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SessionStatusResponse {
    pub status: SessionStatus,
}

/// Status of a checkout session as reported by the payment provider. The value is kept
/// verbatim, only the exact string `complete` means the payment went through.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStatus(pub String);

impl SessionStatus {
    pub const COMPLETE: &'static str = "complete";
    pub const EXPIRED: &'static str = "expired";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn is_complete(&self) -> bool {
        self.0 == Self::COMPLETE
    }

    /// Complete and expired sessions never change their status again.
    pub fn is_final(&self) -> bool {
        self.0 == Self::COMPLETE || self.0 == Self::EXPIRED
    }
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
