use crate::recording_transport::TransportOp;
use std::sync::{Arc, Mutex};
use vizkit_core::transport::Request;

/// A wrapper around the operations log that provides a clean API for tests
pub struct RequestLog {
    ops: Arc<Mutex<Vec<TransportOp>>>,
}

impl RequestLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<TransportOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged requests
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// All logged requests, oldest first
    pub fn requests(&self) -> Vec<Request> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.request.clone())
            .collect()
    }

    /// The `n`th logged request
    #[track_caller]
    pub fn request(&self, n: usize) -> Request {
        let ops = self.ops.lock().unwrap();
        match ops.get(n) {
            Some(op) => op.request.clone(),
            None => panic!("expected at least {} requests; logged={}", n + 1, ops.len()),
        }
    }

    /// URL paths of all logged requests
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}
