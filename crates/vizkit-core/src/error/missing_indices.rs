use super::Error;

/// Error when an index pattern matches no indices.
///
/// The service reports this as a 404 with the `no_matching_indices` code.
/// Callers usually treat it as an empty result rather than a failure.
#[derive(Debug)]
pub(super) struct MissingIndicesError {
    message: Box<str>,
}

impl std::error::Error for MissingIndicesError {}

impl core::fmt::Display for MissingIndicesError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a missing indices error carrying the server's message.
    pub fn missing_indices(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIndices(MissingIndicesError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing indices error.
    pub fn is_missing_indices(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::MissingIndices(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
