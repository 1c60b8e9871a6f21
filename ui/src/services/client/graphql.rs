use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::errors::{ClientError, ClientResult, GraphQlErrorEntry};
use crate::services::config::ApiConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V: Serialize> {
    operation_name: &'a str,
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

/// GraphQL client for the billing API
#[derive(Clone)]
pub struct BillingApiClient {
    pub(crate) http_client: Client,
    pub(crate) config: ApiConfig,
}

impl BillingApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.graphql_url
    }

    /// Run one GraphQL operation and decode its `data` payload
    #[instrument(skip(self, query, variables), err)]
    pub async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> ClientResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            operation_name: operation,
            query,
            variables,
        };

        let mut request = self
            .http_client
            .post(self.endpoint())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(organization_id) = &self.config.organization_id {
            request = request.header("x-billing-organization", organization_id);
        }

        let response = request.send().await.map_err(|e| ClientError::NetworkError {
            message: format!("Failed to send {}: {}", operation, e),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ClientError::NetworkError {
            message: format!("Failed to read {} response: {}", operation, e),
        })?;
        debug!("{} responded with {} ({} bytes)", operation, status, text.len());

        // GraphQL servers report resolver errors with a 200 or a 4xx body; try the body first
        match serde_json::from_str::<GraphQlResponse<T>>(&text) {
            Ok(parsed) => decode_graphql_response(operation, parsed),
            Err(_) if !status.is_success() => Err(ClientError::HttpStatus {
                status: status.as_u16(),
                endpoint: self.endpoint().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

fn decode_graphql_response<T>(operation: &str, response: GraphQlResponse<T>) -> ClientResult<T> {
    if !response.errors.is_empty() {
        return Err(ClientError::GraphQl {
            operation: operation.to_string(),
            errors: response.errors,
        });
    }
    response.data.ok_or_else(|| ClientError::InvalidResponse {
        expected: format!("data for {}", operation),
        got: "null".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Payload {
        value: u32,
    }

    fn parse(body: serde_json::Value) -> ClientResult<Payload> {
        let response: GraphQlResponse<Payload> = serde_json::from_value(body).unwrap();
        decode_graphql_response("testOperation", response)
    }

    #[test]
    fn test_decode_data() {
        assert_eq!(
            parse(json!({ "data": { "value": 3 } })).unwrap(),
            Payload { value: 3 }
        );
    }

    #[test]
    fn test_decode_errors_win_over_partial_data() {
        let result = parse(json!({
            "data": null,
            "errors": [{ "message": "unauthorized", "extensions": { "code": "unauthorized" } }]
        }));
        match result {
            Err(ClientError::GraphQl { operation, errors }) => {
                assert_eq!(operation, "testOperation");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        assert!(matches!(
            parse(json!({ "data": null })),
            Err(ClientError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = GraphQlRequest {
            operation_name: "getTaxRates",
            query: "query getTaxRates { taxRates { metadata { currentPage } } }",
            variables: json!({ "limit": 20 }),
        };
        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(encoded["operationName"], "getTaxRates");
        assert_eq!(encoded["variables"]["limit"], 20);
    }
}
