//! Authenticated calls against the partition-scoped resource API

use async_trait::async_trait;
use buildingx_core::{decode_error_response, RestExecutor};
use buildingx_domain::constants::{JSON_CONTENT_TYPE, OPERATIONS_PATH};
use buildingx_domain::{ApiRequest, BuildingXConfig, BuildingXError, Result, Verb};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// [`RestExecutor`] issuing one HTTP request per call
#[derive(Debug, Clone)]
pub struct HttpRestExecutor {
    http: HttpClient,
    endpoint: String,
}

impl HttpRestExecutor {
    /// `endpoint` is the API root; partitions are addressed below
    /// `<endpoint>/operations/partitions/`.
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    pub fn from_config(config: &BuildingXConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(http, config.endpoint.clone()))
    }

    fn url(&self, request: &ApiRequest) -> Result<String> {
        let endpoint = self.endpoint.trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(BuildingXError::Config("missing buildingx api endpoint".to_string()));
        }

        Ok(format!(
            "{endpoint}/{OPERATIONS_PATH}/{}/{}",
            urlencoding::encode(&request.partition),
            request.path.trim_start_matches('/'),
        ))
    }
}

fn method(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Patch => Method::PATCH,
    }
}

#[async_trait]
impl RestExecutor for HttpRestExecutor {
    #[instrument(skip(self, request), fields(verb = %request.verb, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.url(&request)?;

        let mut builder = self
            .http
            .request(method(request.verb), &url)
            .header(AUTHORIZATION, format!("Bearer {}", request.token))
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, request.verb.content_type());

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT && request.verb.accepts_no_content() {
            debug!(%status, "request succeeded without content");
            return Ok(Vec::new());
        }

        if status == StatusCode::OK {
            let payload = response
                .bytes()
                .await
                .map_err(|err| BuildingXError::from(InfraError::from(err)))?;
            debug!(%status, bytes = payload.len(), "request succeeded");
            return Ok(payload.to_vec());
        }

        // An unreadable body still yields an API error.
        let payload = response.bytes().await.map(|bytes| bytes.to_vec()).unwrap_or_default();
        let err = decode_error_response(status.as_u16(), &payload);
        warn!(%status, error = err.label(), "request rejected");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn executor(endpoint: &str) -> HttpRestExecutor {
        HttpRestExecutor::new(HttpClient::new().unwrap(), endpoint)
    }

    #[tokio::test]
    async fn get_carries_bearer_and_partition_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/operations/partitions/p-1/devices/d1"))
            .and(query_param("include", "hasFeatures.DeviceInfo,hasFeatures.Connectivity"))
            .and(header("authorization", "Bearer jwt-1"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":"d1"}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::get(
            "p-1",
            "jwt-1",
            "devices/d1?include=hasFeatures.DeviceInfo,hasFeatures.Connectivity",
        );
        let body = executor(&format!("{}/api/v1/", server.uri())).execute(request).await.unwrap();

        assert_eq!(body, br#"{"data":{"id":"d1"}}"#.to_vec());
    }

    #[tokio::test]
    async fn patch_sends_json_patch_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/operations/partitions/p-1/points/p9"))
            .and(header("content-type", "application/json-patch+json"))
            .and(body_string(r#"[{"op":"replace","path":"/value","value":"1"}]"#))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::get("p-1", "jwt-1", "points/p9").with_body(
            Verb::Patch,
            br#"[{"op":"replace","path":"/value","value":"1"}]"#.to_vec(),
        );
        let body = executor(&server.uri()).execute(request).await.unwrap();

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn no_content_is_an_error_for_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(204)).mount(&server).await;

        let err = executor(&server.uri())
            .execute(ApiRequest::get("p-1", "jwt-1", "devices"))
            .await
            .unwrap_err();

        assert!(matches!(err, BuildingXError::Api { .. }));
        assert!(err.to_string().contains("204"));
    }

    #[tokio::test]
    async fn not_found_envelope_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"status": "404", "detail": "device not found"}]
            })))
            .mount(&server)
            .await;

        let err = executor(&server.uri())
            .execute(ApiRequest::get("p-1", "jwt-1", "devices/missing"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BuildingXError::Api { status: "404".into(), detail: "device not found".into() }
        );
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = executor(&server.uri())
            .execute(ApiRequest::get("p-1", "jwt-1", "locations"))
            .await
            .unwrap_err();

        match err {
            BuildingXError::Api { status, detail } => {
                assert_eq!(status, "500");
                assert!(detail.contains("no additional information"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_endpoint_is_config_error() {
        let err = executor("").execute(ApiRequest::get("p-1", "jwt-1", "locations")).await.unwrap_err();
        assert_eq!(err, BuildingXError::Config("missing buildingx api endpoint".into()));
    }

    #[test]
    fn url_joins_endpoint_partition_and_path() {
        let request = ApiRequest::get("p 1", "t", "/locations?include=hasPostalAddress");
        let url = executor("https://api.example.com/api/v1//").url(&request).unwrap();
        assert_eq!(
            url,
            "https://api.example.com/api/v1/operations/partitions/p%201/locations?include=hasPostalAddress"
        );
    }
}
