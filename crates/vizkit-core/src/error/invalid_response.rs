use super::Error;

/// Error when a successful response does not have the expected shape.
#[derive(Debug)]
pub(super) struct InvalidResponseError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for InvalidResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for InvalidResponseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid response: {}", self.inner)
    }
}

impl Error {
    /// Creates an invalid response error.
    pub fn invalid_response(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::InvalidResponse(InvalidResponseError {
            inner: err.into(),
        }))
    }

    /// Returns `true` if this error is an invalid response error.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidResponse(_))
    }
}
