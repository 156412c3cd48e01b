use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use std::borrow::Cow;
use std::fmt;

use crate::config::Config;
use crate::errors::ScenarioResult;

/// One call against the pet store, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: vec![],
            query: vec![],
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Status plus raw body; JSON is only parsed when asked for.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json(&self) -> ScenarioResult<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn json_as<T: DeserializeOwned>(&self) -> ScenarioResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Thin wrapper over `reqwest::Client` bound to one pet store origin.
///
/// No retries and no recovery: a connection failure is returned to the caller
/// as `ScenarioError::Transport`.
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> ScenarioResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base: config.base().to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url_for(&self, path: &str) -> ScenarioResult<Url> {
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", self.base, path))?)
    }

    pub async fn execute(&self, request: ApiRequest) -> ScenarioResult<ApiResponse> {
        let url = self.url_for(&request.path)?;
        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("{} failed: {}", request, e);
            e
        })?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("{} -> {} ({} bytes)", request, status, body.len());
        Ok(ApiResponse::new(status, body))
    }

    pub async fn get(&self, path: impl Into<String>) -> ScenarioResult<ApiResponse> {
        self.execute(ApiRequest::get(path)).await
    }

    pub async fn post(&self, path: impl Into<String>, body: Value) -> ScenarioResult<ApiResponse> {
        self.execute(ApiRequest::post(path).json(body)).await
    }

    pub async fn put(&self, path: impl Into<String>, body: Value) -> ScenarioResult<ApiResponse> {
        self.execute(ApiRequest::put(path).json(body)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> ScenarioResult<ApiResponse> {
        self.execute(ApiRequest::delete(path)).await
    }
}
