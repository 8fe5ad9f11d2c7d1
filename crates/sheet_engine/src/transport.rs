use futures_util::StreamExt;

use crate::types::{ApiError, ApiRequest, ApiResponse, Method};
use crate::ClientSettings;

/// Sends one HTTP request and hands back the raw response.
///
/// Implementations report any received status as `Ok`; status checks belong
/// to the caller.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    max_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            max_bytes: settings.max_response_bytes,
        })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = reqwest::Url::parse(&request.url).map_err(|err| ApiError::InvalidUrl {
            url: request.url.clone(),
            message: err.to_string(),
        })?;

        let mut builder = self.client.request(map_method(&request.method)?, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        // Error bodies are never parsed, so the size cap must not mask the status.
        if !status.is_success() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                status_text: reason_phrase(status),
                body: Vec::new(),
            });
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(ApiError::TooLarge {
                    max_bytes: self.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(ApiError::TooLarge {
                    max_bytes: self.max_bytes,
                    actual: Some(next_len),
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: reason_phrase(status),
            body,
        })
    }
}

fn reason_phrase(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

fn map_method(method: &Method) -> Result<reqwest::Method, ApiError> {
    Ok(match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Other(verb) => reqwest::Method::from_bytes(verb.as_bytes())
            .map_err(|_| ApiError::InvalidMethod(verb.clone()))?,
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout(err.to_string());
    }
    ApiError::Network(err.to_string())
}
