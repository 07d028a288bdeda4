mod method;
pub use method::Method;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

use crate::async_trait;

use std::fmt::Debug;

/// Sends HTTP requests on behalf of a client.
///
/// A transport reports any HTTP status as a successful send. Only failures to
/// deliver the request or read the response are errors, and those should be
/// built with [`Error::transport`](crate::Error::transport).
#[async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Send one request and wait for the complete response.
    async fn send(&self, request: Request) -> crate::Result<Response>;
}
