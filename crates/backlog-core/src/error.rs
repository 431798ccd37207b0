use crate::option::{FormType, OptionType, QueryType};
use crate::utils::nullable::null_as_default;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BacklogError {
    #[error("ClientError: {0}")]
    Client(#[from] ClientError),
    #[error(transparent)]
    Api(#[from] ApiResponseError),
    #[error(transparent)]
    InvalidQueryOption(#[from] InvalidOptionError<QueryType>),
    #[error(transparent)]
    InvalidFormOption(#[from] InvalidOptionError<FormType>),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

/// Misuse of the client itself: missing token, unparsable base URL, empty
/// request path, upload without a file name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A value handed to an option factory or a resource operation broke a
/// domain rule (range, emptiness, enumeration membership).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An option was passed to an operation whose whitelist does not contain
/// its kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid option:{invalid}, allowed options:{}", join_kinds(.allowed))]
pub struct InvalidOptionError<T: OptionType> {
    pub invalid: T,
    pub allowed: Vec<T>,
}

fn join_kinds<T: OptionType>(kinds: &[T]) -> String {
    kinds
        .iter()
        .map(|kind| kind.value())
        .collect::<Vec<_>>()
        .join(",")
}

/// One entry of the `errors` array in a Backlog error body.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(rename = "moreInfo", default, deserialize_with = "null_as_default")]
    pub more_info: String,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message:{}, Code:{}", self.message, self.code)?;
        if !self.more_info.is_empty() {
            write!(f, ", MoreInfo:{}", self.more_info)?;
        }
        Ok(())
    }
}

/// The remote service answered with a non-success status.
///
/// `errors` is empty when the body was missing or could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiResponseError {
    pub status_code: u16,
    pub errors: Vec<ApiErrorDetail>,
}

impl fmt::Display for ApiResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status Code:{}", self.status_code)?;
        for detail in &self.errors {
            write!(f, "\n{}", detail)?;
        }
        Ok(())
    }
}

/// Failure inside the injected transport. The client hands it back as is.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

impl BacklogError {
    /// Status code of a decoded API failure, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BacklogError::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, BacklogError::Validation(_))
    }

    pub fn is_invalid_option(&self) -> bool {
        matches!(
            self,
            BacklogError::InvalidQueryOption(_) | BacklogError::InvalidFormOption(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_detail_display() {
        let detail = ApiErrorDetail {
            message: "No project.".to_string(),
            code: 6,
            more_info: "more info".to_string(),
        };
        assert_eq!(
            detail.to_string(),
            "Message:No project., Code:6, MoreInfo:more info"
        );
    }

    #[test]
    fn test_api_error_detail_display_without_more_info() {
        let detail = ApiErrorDetail {
            message: "No project.".to_string(),
            code: 6,
            more_info: String::new(),
        };
        assert_eq!(detail.to_string(), "Message:No project., Code:6");
    }

    #[test]
    fn test_api_response_error_display() {
        let err = ApiResponseError {
            status_code: 404,
            errors: vec![
                ApiErrorDetail {
                    message: "1st error".to_string(),
                    code: 5,
                    more_info: "more info 1".to_string(),
                },
                ApiErrorDetail {
                    message: "2nd error".to_string(),
                    code: 9,
                    more_info: "more info 2".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Status Code:404\nMessage:1st error, Code:5, MoreInfo:more info 1\nMessage:2nd error, Code:9, MoreInfo:more info 2"
        );
    }

    #[test]
    fn test_api_response_error_display_status_only() {
        let err = ApiResponseError {
            status_code: 500,
            errors: vec![],
        };
        assert_eq!(err.to_string(), "Status Code:500");
    }

    #[test]
    fn test_invalid_form_option_display() {
        let err = InvalidOptionError {
            invalid: FormType::Key,
            allowed: vec![FormType::Name, FormType::Key, FormType::ChartEnabled],
        };
        assert_eq!(
            err.to_string(),
            "invalid option:key, allowed options:name,key,chartEnabled"
        );
    }

    #[test]
    fn test_invalid_query_option_display() {
        let err = InvalidOptionError {
            invalid: QueryType::ActivityTypeIds,
            allowed: vec![QueryType::All, QueryType::Archived, QueryType::Order],
        };
        assert_eq!(
            err.to_string(),
            "invalid option:activityTypeId[], allowed options:all,archived,order"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("validation error");
        assert_eq!(err.to_string(), "validation error");
    }

    #[test]
    fn test_backlog_error_kind_helpers() {
        let api: BacklogError = ApiResponseError {
            status_code: 401,
            errors: vec![],
        }
        .into();
        assert_eq!(api.status_code(), Some(401));
        assert!(!api.is_validation());

        let validation: BacklogError = ValidationError::new("bad").into();
        assert!(validation.is_validation());
        assert_eq!(validation.status_code(), None);

        let invalid: BacklogError = InvalidOptionError {
            invalid: QueryType::Count,
            allowed: vec![QueryType::Order],
        }
        .into();
        assert!(invalid.is_invalid_option());
    }

    #[test]
    fn test_client_error_prefix() {
        let err: BacklogError = ClientError::new("missing token").into();
        assert_eq!(err.to_string(), "ClientError: missing token");
    }
}
