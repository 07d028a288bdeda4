use super::Error;

#[derive(Debug)]
pub(super) struct InvalidBasePathError {
    message: Box<str>,
}

impl std::error::Error for InvalidBasePathError {}

impl core::fmt::Display for InvalidBasePathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid base path: {}", self.message)
    }
}

impl Error {
    pub fn invalid_base_path(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidBasePath(InvalidBasePathError {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_base_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidBasePath(_))
    }
}
