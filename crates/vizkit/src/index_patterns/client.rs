use super::{Builder, FieldsForTimePattern, FieldsForWildcard, Query, NO_MATCHING_INDICES};
use crate::{
    transport::{Method, Request, Transport},
    Error, Result,
};

use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Looks up field metadata for index patterns.
///
/// Cheap to clone; clones share the transport.
#[derive(Debug, Clone)]
pub struct IndexPatternsApiClient {
    transport: Arc<dyn Transport>,

    /// `{base_path}/api/index_patterns/`
    api_base_url: Url,
}

impl IndexPatternsApiClient {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the application at `base_path`, picking the transport from
    /// the URL scheme.
    pub fn connect(base_path: &str) -> Result<Self> {
        Self::builder().base_path(base_path).build()
    }

    pub(super) fn new(transport: Arc<dyn Transport>, api_base_url: Url) -> Self {
        Self {
            transport,
            api_base_url,
        }
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Builds the URL of an API endpoint.
    ///
    /// Empty path segments are skipped; the rest are percent-encoded one by
    /// one, so a `/` inside a segment does not start a new one.
    pub fn url(&self, path: &[&str], query: &Query) -> Result<Url> {
        let mut url = self.api_base_url.clone();

        let Ok(mut segments) = url.path_segments_mut() else {
            let message = format!("`{}` cannot hold path segments", self.api_base_url);
            return Err(Error::invalid_base_path(message));
        };
        segments.pop_if_empty();
        segments.extend(path.iter().filter(|segment| !segment.is_empty()));
        drop(segments);

        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query.pairs());
        }

        Ok(url)
    }

    /// Sends one request and returns the parsed JSON body.
    ///
    /// Non-2xx responses become errors: a 404 carrying the
    /// `no_matching_indices` code is a missing indices error, anything else an
    /// HTTP status error holding the status and body.
    pub async fn request(&self, method: Method, url: Url, body: Option<Value>) -> Result<Value> {
        log::debug!("index patterns request; method={method} url={url}");

        let mut request = Request::new(method, url);
        request.body = body;

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let body = response.to_json().unwrap_or(Value::Null);
            return Err(status_error(response.status, body));
        }

        response.to_json()
    }

    /// Returns the fields of the indices matching a time-based pattern.
    pub async fn get_fields_for_time_pattern(
        &self,
        options: &FieldsForTimePattern,
    ) -> Result<Vec<Value>> {
        let query = Query::new()
            .param("pattern", options.pattern.as_str())
            .param("look_back", options.look_back)
            .param("meta_fields", options.meta_fields.clone());
        let url = self.url(&["_fields_for_time_pattern"], &query)?;

        let resp = self.request(Method::Get, url, None).await?;
        into_fields(resp)
    }

    /// Returns the fields of the indices matching a wildcard pattern.
    ///
    /// For a typed pattern the fields are then sent to the type-specific
    /// endpoint, and its answer is returned instead. That second request
    /// depends on the first response and is only sent once it has arrived.
    pub async fn get_fields_for_wildcard(&self, options: &FieldsForWildcard) -> Result<Vec<Value>> {
        let query = Query::new()
            .param("pattern", options.pattern.as_str())
            .param("meta_fields", options.meta_fields.clone());
        let url = self.url(&["_fields_for_wildcard"], &query)?;

        let resp = self.request(Method::Get, url, None).await?;
        let fields = into_fields(resp)?;

        let Some(type_name) = options.type_segment() else {
            return Ok(fields);
        };

        log::debug!(
            "resolving fields through type endpoint; type={type_name} pattern={}",
            options.pattern
        );

        let query = Query::new()
            .param("pattern", options.pattern.as_str())
            .param("fields", fields)
            .param("meta_fields", options.meta_fields.clone())
            .param("params", options.params.clone());
        let type_url = self.url(&[type_name, "_fields_for_wildcard"], &query)?;

        let resp = self.request(Method::Get, type_url, None).await?;
        into_fields(resp)
    }
}

fn status_error(status: u16, body: Value) -> Error {
    let code = body.get("code").and_then(Value::as_str);
    if status == 404 && code == Some(NO_MATCHING_INDICES) {
        let message = body.get("message").and_then(Value::as_str);
        return Error::missing_indices(message.unwrap_or_default());
    }

    Error::http_status(status, body)
}

fn into_fields(mut resp: Value) -> Result<Vec<Value>> {
    match resp.get_mut("fields").map(Value::take) {
        Some(Value::Array(fields)) => Ok(fields),
        Some(other) => {
            let message = format!("expected `fields` to be an array; found {other}");
            Err(Error::invalid_response(message))
        }
        None => Err(Error::invalid_response("response has no `fields`")),
    }
}
