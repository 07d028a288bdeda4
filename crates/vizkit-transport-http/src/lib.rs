use reqwest::{header, Client};
use vizkit_core::{
    async_trait,
    transport::{Method, Request, Response},
    Error, Result, Transport,
};

/// Sends requests over HTTP with [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. one carrying default headers or a
    /// timeout.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for Http {
    async fn send(&self, request: Request) -> Result<Response> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url)
            .header(header::ACCEPT, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Error::transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Error::transport)?;

        log::trace!("http response; status={status} len={}", body.len());

        Ok(Response::new(status, body.to_vec()))
    }
}
