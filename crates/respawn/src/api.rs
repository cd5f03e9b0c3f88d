//! Thin JSON-over-HTTP wrapper used by the forum client.

use gloo_net::http::{Request, RequestBuilder, Response};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Maps a response status onto the error it stands for, `None` meaning success.
pub fn status_error(status: u16, endpoint: &str) -> Option<ApiError> {
    match status {
        200..=299 => None,
        400 => Some(ApiError::BadRequest(format!("Bad request to {endpoint}"))),
        401 => Some(ApiError::UnauthorizedAccess),
        403 => Some(ApiError::ForbiddenAccess),
        404 => Some(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Some(ApiError::InternalServerError),
        status => Some(ApiError::UnexpectedStatusCode(status)),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    if let Some(err) = status_error(response.status(), endpoint) {
        return Err(err);
    }
    response.json::<T>().await.map_err(ApiError::ParseError)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key, value);
    }

    /// Joins the configured root with an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }

    fn request(&self, method: HttpMethod, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        tracing::debug!(?method, %url, "sending request");

        let request = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        request.headers(self.headers.clone().into())
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .request(HttpMethod::Get, endpoint)
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .request(HttpMethod::Post, endpoint)
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)?;
        handle_json_response(response, endpoint).await
    }
}
