use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::constants::CONTENT_TYPE_JSON;
use crate::types::{Result, SocketError};

/// Thin JSON request helper for the application's HTTP surface.
///
/// Stateless: each call issues one request and translates a
/// non-success status into [`SocketError::Api`], reading the server's
/// `detail` field from the body when it carries one.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (for example
    /// `http://127.0.0.1:8000`). Paths passed to the request methods
    /// are appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", CONTENT_TYPE_JSON);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|value| {
                    value
                        .get("detail")
                        .and_then(|detail| detail.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(SocketError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // 204 carries no body; unit deserializes from null
        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_detail() {
        let error = SocketError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(error.to_string(), "API error (404): Not found");
    }
}
