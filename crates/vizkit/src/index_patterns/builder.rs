use super::IndexPatternsApiClient;
use crate::{transport::Transport, Result};

use std::sync::Arc;
use url::Url;

#[derive(Debug, Default)]
pub struct Builder {
    /// Root of the application, e.g. `http://localhost:5601/s/marketing`
    base_path: Option<String>,

    transport: Option<Arc<dyn Transport>>,
}

impl Builder {
    pub fn base_path(&mut self, base_path: impl Into<String>) -> &mut Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn transport(&mut self, transport: impl Transport) -> &mut Self {
        let transport: Arc<dyn Transport> = Arc::new(transport);
        self.transport = Some(transport);
        self
    }

    pub fn build(&mut self) -> Result<IndexPatternsApiClient> {
        let Some(base_path) = &self.base_path else {
            vizkit_core::bail!("index patterns client requires a base path");
        };
        let api_base_url = api_base_url(base_path)?;

        let transport = match &self.transport {
            Some(transport) => transport.clone(),
            None => crate::transport::connect(&api_base_url)?,
        };

        Ok(IndexPatternsApiClient::new(transport, api_base_url))
    }
}

/// `{base_path}/api/index_patterns/`
fn api_base_url(base_path: &str) -> Result<Url> {
    let mut url = Url::parse(base_path)?;
    if url.cannot_be_a_base() {
        let message = format!("`{base_path}` cannot hold path segments");
        return Err(crate::Error::invalid_base_path(message));
    }

    url.set_query(None);
    url.set_fragment(None);

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        segments.extend(["api", "index_patterns", ""]);
    }

    Ok(url)
}
