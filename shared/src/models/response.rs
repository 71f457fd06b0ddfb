use serde::{Deserialize, Serialize};

/// Response envelope used by every JSON endpoint of the API service.
/// `None` fields are left out of the serialized body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T, status: u16) -> Self {
        Self {
            data: Some(data),
            error: None,
            message: None,
            status,
        }
    }

    pub fn message(message: impl Into<String>, status: u16) -> Self {
        Self {
            data: None,
            error: None,
            message: Some(message.into()),
            status,
        }
    }

    pub fn error(error: impl Into<String>, status: u16) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            message: None,
            status,
        }
    }
}
