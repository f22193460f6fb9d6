//! API Gateway
//!
//! Every backend call goes through [`ApiClient::request`]: bearer token
//! attachment, JSON/text normalization, error mapping and 401 handling.
//! Endpoint wrappers live in the submodules, organized by resource.

mod transport;
mod auth;
mod speciality;
mod service;
mod provider;
mod appointment;

#[cfg(test)]
pub(crate) mod testing;

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{KeyValueStore, LocalStorage, SessionStore};

pub use transport::{FetchTransport, HttpRequest, HttpResponse, Method, Transport};

/// Unreserved characters stay literal in paths and query values
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

// ========================
// Response body
// ========================

/// Normalized response payload
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// `strict` turns malformed JSON under a JSON content type into an error
    fn from_response(response: &HttpResponse, strict: bool) -> Result<Self, ApiError> {
        let text = response.body.trim();
        if text.is_empty() {
            return Ok(ApiBody::Empty);
        }

        let declared_json = response
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        match serde_json::from_str::<Value>(text) {
            Ok(value) => Ok(ApiBody::Json(value)),
            Err(e) if declared_json && strict => Err(ApiError::Decode(e.to_string())),
            Err(_) => Ok(ApiBody::Text(text.to_string())),
        }
    }

    /// Human message carried by an error body
    fn error_message(&self) -> Option<String> {
        match self {
            ApiBody::Json(Value::Object(map)) => ["message", "error", "title"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string),
            ApiBody::Json(Value::String(s)) => Some(s.clone()),
            ApiBody::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    pub fn into_json<R: DeserializeOwned>(self) -> Result<R, ApiError> {
        match self {
            ApiBody::Json(value) => Ok(serde_json::from_value(value)?),
            ApiBody::Empty => Ok(serde_json::from_value(Value::Null)?),
            ApiBody::Text(text) => Err(ApiError::Decode(format!("expected JSON, got {:?}", text))),
        }
    }

    /// A list payload; tolerates empty bodies and `{ "$values": [...] }`-style wrappers
    pub fn into_list<R: DeserializeOwned>(self) -> Result<Vec<R>, ApiError> {
        match self {
            ApiBody::Empty | ApiBody::Json(Value::Null) => Ok(Vec::new()),
            ApiBody::Json(Value::Object(mut map)) => {
                let inner = ["$values", "data", "items"]
                    .iter()
                    .find_map(|key| map.remove(*key))
                    .ok_or_else(|| ApiError::Decode("expected a list".into()))?;
                ApiBody::Json(inner).into_list()
            }
            other => other.into_json(),
        }
    }
}

// ========================
// Client
// ========================

/// Gateway bound to a transport, a session store and a config
pub struct ApiClient<T: Transport = FetchTransport, S: KeyValueStore = LocalStorage> {
    transport: T,
    session: SessionStore<S>,
    config: Config,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    /// Client over `fetch` + `localStorage`
    pub fn browser(config: Config) -> Self {
        Self::new(FetchTransport, SessionStore::browser(), config)
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, session: SessionStore<S>, config: Config) -> Self {
        Self {
            transport,
            session,
            config,
            on_unauthorized: None,
        }
    }

    /// Hook run after a 401 has cleared the session
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send one call. `extra_headers` are applied after the defaults and
    /// replace any default of the same name.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        extra_headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<ApiBody, ApiError> {
        let mut headers = vec![("Accept".to_string(), "text/plain, application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        let sent_token = self.session.get_token();
        if let Some(token) = &sent_token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        for (name, value) in extra_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.to_string(), value.to_string()));
        }

        let request = HttpRequest {
            method,
            url: self.config.url(endpoint),
            headers,
            body,
        };
        log::debug!("[API] {} {}", method.as_str(), endpoint);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("[API] {} {} failed: {}", method.as_str(), endpoint, e);
            e
        })?;

        if response.status == 401 {
            // A newer login may have replaced the token while this call was in flight
            if self.session.get_token() == sent_token {
                log::warn!("[API] 401 on {} {}, ending session", method.as_str(), endpoint);
                self.session.clear_auth();
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
            } else {
                log::warn!("[API] Stale 401 on {} {}, session kept", method.as_str(), endpoint);
            }
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            let body = ApiBody::from_response(&response, false)?;
            let error = ApiError::http(response.status, body.error_message());
            log::warn!("[API] {} {} -> {}: {}", method.as_str(), endpoint, response.status, error);
            return Err(error);
        }

        ApiBody::from_response(&response, true)
    }

    pub async fn get(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(Method::Get, endpoint, &[], None).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiBody, ApiError> {
        self.request(Method::Delete, endpoint, &[], None).await
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiBody, ApiError> {
        let json = serde_json::to_string(body)?;
        self.request(method, endpoint, &[], Some(json)).await
    }
}
