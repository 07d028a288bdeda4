use super::Error;

/// Error when an editor cannot be built for a type instance, e.g. an axis
/// editor bound to a name that is not an axis.
#[derive(Debug)]
pub(super) struct InvalidTypeInstanceError {
    message: Box<str>,
}

impl std::error::Error for InvalidTypeInstanceError {}

impl core::fmt::Display for InvalidTypeInstanceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid type instance: {}", self.message)
    }
}

impl Error {
    pub fn invalid_type_instance(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTypeInstance(
            InvalidTypeInstanceError {
                message: message.into().into(),
            },
        ))
    }

    pub fn is_invalid_type_instance(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTypeInstance(_))
    }
}
