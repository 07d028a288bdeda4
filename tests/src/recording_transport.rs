use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use vizkit_core::{
    async_trait,
    transport::{Request, Response},
    Error, Result, Transport,
};

#[derive(Debug, Clone)]
pub struct TransportOp {
    pub request: Request,
    pub response: Result<Response>,
}

/// A transport that answers from a scripted queue and logs every request.
///
/// Sending with an empty queue is a transport error, so a test that triggers
/// an unexpected request fails loudly instead of hanging.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    replies: Arc<Mutex<VecDeque<Result<Response>>>>,

    /// Log of all requests sent through this transport
    ops_log: Arc<Mutex<Vec<TransportOp>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply for the next request.
    pub fn push_reply(&self, reply: Result<Response>) {
        self.replies
            .lock()
            .expect("Failed to acquire replies lock")
            .push_back(reply);
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<TransportOp>>> {
        self.ops_log.clone()
    }

    /// Number of queued replies not yet consumed.
    pub fn pending_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let response = self
            .replies
            .lock()
            .expect("Failed to acquire replies lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(Error::transport(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    format!("no scripted reply for {} {}", request.method, request.url),
                )))
            });

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(TransportOp {
                request,
                response: response.clone(),
            });

        response
    }
}
