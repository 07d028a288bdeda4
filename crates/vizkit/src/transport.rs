//! Picking a transport from a URL.

use crate::Result;

pub use vizkit_core::transport::{Method, Request, Response, Transport};

use std::sync::Arc;
use url::Url;

/// Returns a transport able to reach `url`.
pub(crate) fn connect(url: &Url) -> Result<Arc<dyn Transport>> {
    match url.scheme() {
        "http" | "https" => connect_http(url),
        scheme => vizkit_core::bail!("unsupported transport; scheme={scheme}; url={url}"),
    }
}

#[cfg(feature = "http")]
fn connect_http(_url: &Url) -> Result<Arc<dyn Transport>> {
    Ok(Arc::new(vizkit_transport_http::Http::new()))
}

#[cfg(not(feature = "http"))]
fn connect_http(_url: &Url) -> Result<Arc<dyn Transport>> {
    Err(vizkit_core::err!("`http` feature not enabled"))
}
