use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform top-level envelope. `status` is always present, `message` only
/// where an operation carries one, and the payload fields are flattened
/// next to them rather than nested under a wrapper key.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub body: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(body: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            body: Some(body),
        }
    }

    pub fn success_with_message(message: impl Into<String>, body: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            body: Some(body),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            body: None,
        }
    }
}
