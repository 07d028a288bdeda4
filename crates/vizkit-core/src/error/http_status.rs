use super::Error;
use serde_json::Value;

/// Error when the remote service answers with a non-2xx status.
///
/// Carries the status and the parsed response body. A body that was not valid
/// JSON is kept as `null`.
#[derive(Debug)]
pub(super) struct HttpStatusError {
    status: u16,
    message: Box<str>,
    body: Value,
}

impl HttpStatusError {
    /// Picks the body's `message`, then its `error`, then a generic
    /// `"{status} Response"` line.
    fn message_for(status: u16, body: &Value) -> Box<str> {
        ["message", "error"]
            .iter()
            .filter_map(|key| body.get(key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .map(Box::from)
            .unwrap_or_else(|| format!("{status} Response").into())
    }
}

impl std::error::Error for HttpStatusError {}

impl core::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from an unsuccessful HTTP response.
    pub fn http_status(status: u16, body: Value) -> Error {
        let message = HttpStatusError::message_for(status, &body);
        Error::from(super::ErrorKind::HttpStatus(HttpStatusError {
            status,
            message,
            body,
        }))
    }

    /// Returns `true` if this error is an unsuccessful HTTP response.
    pub fn is_http_status(&self) -> bool {
        self.status().is_some()
    }

    /// The HTTP status of an unsuccessful response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::HttpStatus(err) => Some(err.status),
            _ => None,
        })
    }

    /// The parsed body of an unsuccessful response, if this error carries one.
    pub fn body(&self) -> Option<&Value> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::HttpStatus(err) => Some(&err.body),
            _ => None,
        })
    }
}
