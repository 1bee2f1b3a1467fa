use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::forwarder::error::{ForwardError, ForwardResult};
use crate::forwarder::{HttpResponse, HttpTransport};

/// Transport double that records every request and answers with a canned result.
#[derive(Clone)]
pub struct StubTransport {
    reply: Result<u16, ForwardError>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl StubTransport {
    pub fn status(status: u16) -> Self {
        Self {
            reply: Ok(status),
            requests: Arc::default(),
        }
    }

    pub fn failing(error: ForwardError) -> Self {
        Self {
            reply: Err(error),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn post_json(&self, url: &str, body: &Value) -> ForwardResult<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.reply
            .clone()
            .map(|status| HttpResponse { status })
    }
}
