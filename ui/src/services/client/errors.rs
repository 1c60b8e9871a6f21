use thiserror::Error;

/// A single entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

/// Client-side API errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("GraphQL error in {operation}: {}", join_messages(.errors))]
    GraphQl {
        operation: String,
        errors: Vec<GraphQlErrorEntry>,
    },

    #[error("Invalid response format: expected {expected}, got {got}")]
    InvalidResponse { expected: String, got: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

fn join_messages(errors: &[GraphQlErrorEntry]) -> String {
    errors
        .iter()
        .map(|entry| entry.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    /// Transport failures and server-side 5xx are worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::NetworkError { .. } => true,
            ClientError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// GraphQL error code (`extensions.code`) of the first error, if any
    pub fn graphql_code(&self) -> Option<&str> {
        match self {
            ClientError::GraphQl { errors, .. } => errors
                .first()
                .and_then(|entry| entry.extensions.as_ref())
                .and_then(|extensions| extensions.get("code"))
                .and_then(|code| code.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graphql_error_display_and_code() {
        let error = ClientError::GraphQl {
            operation: "destroyTaxRate".to_string(),
            errors: vec![
                GraphQlErrorEntry {
                    message: "Resource not found".to_string(),
                    extensions: Some(json!({ "code": "not_found", "status": 404 })),
                },
                GraphQlErrorEntry {
                    message: "second".to_string(),
                    extensions: None,
                },
            ],
        };

        assert_eq!(
            error.to_string(),
            "GraphQL error in destroyTaxRate: Resource not found; second"
        );
        assert_eq!(error.graphql_code(), Some("not_found"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_retryable_errors() {
        assert!(ClientError::NetworkError {
            message: "offline".to_string()
        }
        .is_retryable());
        assert!(ClientError::HttpStatus {
            status: 502,
            endpoint: "/graphql".to_string()
        }
        .is_retryable());
        assert!(!ClientError::HttpStatus {
            status: 401,
            endpoint: "/graphql".to_string()
        }
        .is_retryable());
    }
}
