//! Recording transport for gateway tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::Transport;

/// Records every dispatched call and replays queued replies in order.
/// An empty queue answers `null`.
#[derive(Default)]
pub(crate) struct MockTransport {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<VecDeque<Result<Value, String>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply_ok(&self, value: Value) {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner).push_back(Ok(value));
    }

    pub(crate) fn reply_err(&self, message: &str) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(message.to_owned()));
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn call_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|(name, _)| name).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((command.to_owned(), args));
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}
