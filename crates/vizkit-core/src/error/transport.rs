use super::Error;

/// Error when a request could not be delivered or its response not read.
///
/// This wraps errors from the underlying HTTP library: connection failures,
/// TLS errors, broken bodies. An HTTP error status is not a transport error.
#[derive(Debug)]
pub(super) struct TransportError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("transport failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Transport(TransportError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Transport(_))
    }
}
