use std::sync::Arc;

use serde_json::Value;
use sheet_core::Severity;
use sheet_logging::{sheet_debug, sheet_error};
use url::Url;

use crate::types::JSON_CONTENT_TYPE;
use crate::{ApiError, ApiRequest, ClientSettings, Method, Notifier, ReqwestTransport, Transport};

/// JSON request helper.
///
/// Every failure is logged, shown as a danger notification and returned to
/// the caller unchanged.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    notifier: Notifier,
    base_url: Option<Url>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        notifier: Notifier,
        base_url: Option<&str>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url
            .map(|raw| {
                Url::parse(raw).map_err(|err| ApiError::InvalidUrl {
                    url: raw.to_string(),
                    message: err.to_string(),
                })
            })
            .transpose()?;
        Ok(Self {
            transport,
            notifier,
            base_url,
        })
    }

    /// Client over [`ReqwestTransport`] configured from `settings`.
    pub fn from_settings(settings: &ClientSettings, notifier: Notifier) -> Result<Self, ApiError> {
        let transport = Arc::new(ReqwestTransport::new(settings)?);
        Self::new(transport, notifier, settings.base_url.as_deref())
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Sends `data` (when present) as a JSON body and parses the JSON reply.
    pub async fn call(
        &self,
        url: &str,
        method: Method,
        data: Option<&Value>,
    ) -> Result<Value, ApiError> {
        match self.execute(url, method, data).await {
            Ok(value) => Ok(value),
            Err(err) => {
                sheet_error!("API call error: {}", err);
                self.notifier.show(err.to_string(), Severity::Danger);
                Err(err)
            }
        }
    }

    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.call(url, Method::Get, None).await
    }

    pub async fn post(&self, url: &str, data: &Value) -> Result<Value, ApiError> {
        self.call(url, Method::Post, Some(data)).await
    }

    pub async fn put(&self, url: &str, data: &Value) -> Result<Value, ApiError> {
        self.call(url, Method::Put, Some(data)).await
    }

    pub async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.call(url, Method::Delete, None).await
    }

    async fn execute(
        &self,
        url: &str,
        method: Method,
        data: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let body = data
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        let request = ApiRequest {
            url: self.resolve_url(url)?.to_string(),
            method,
            headers: vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())],
            body,
        };
        sheet_debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Request {
                status: response.status,
                status_text: response.status_text,
            });
        }

        serde_json::from_slice(&response.body).map_err(|err| ApiError::Parse(err.to_string()))
    }

    fn resolve_url(&self, url: &str) -> Result<Url, ApiError> {
        let invalid = |message: String| ApiError::InvalidUrl {
            url: url.to_string(),
            message,
        };
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(url).map_err(|err| invalid(err.to_string())),
                None => Err(invalid("relative url without a base url".to_string())),
            },
            Err(err) => Err(invalid(err.to_string())),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("notifier", &self.notifier)
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish()
    }
}
