use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::forwarder::config::ForwarderConfig;
use crate::forwarder::constants::SUCCESS_MESSAGE;
use crate::forwarder::error::{internal_error, rejected, ForwardError, ForwardErrorCode, ForwardResult};
use crate::forwarder::payload::Ga4Event;
use crate::forwarder::record::{FieldValue, InputRecord};
use crate::forwarder::transport::{HttpTransport, ReqwestTransport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardStatus {
    Success,
    Error,
}

/// Result handed back to the hosting automation. Serializes as `{"status": ..., "message": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForwardOutcome {
    pub status: ForwardStatus,
    pub message: String,
}

impl ForwardOutcome {
    pub fn success() -> Self {
        Self {
            status: ForwardStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ForwardStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ForwardStatus::Success
    }
}

impl From<ForwardError> for ForwardOutcome {
    fn from(err: ForwardError) -> Self {
        match (&err.code, err.status()) {
            (ForwardErrorCode::Rejected, Some(status)) => {
                ForwardOutcome::error(format!("Failed to send event: {status}"))
            }
            _ => ForwardOutcome::error(format!("Request failed: {}", err.message())),
        }
    }
}

/// Fully resolved request: target URL and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub payload: Ga4Event,
}

/// Maps input records onto GA4 events and submits each one with a single `POST`.
#[derive(Clone)]
pub struct EventForwarder {
    config: ForwarderConfig,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for EventForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventForwarder")
            .field("config", &self.config)
            .finish()
    }
}

impl EventForwarder {
    /// Creates a forwarder that sends through a `reqwest` client built from `config`.
    pub fn new(config: ForwarderConfig) -> ForwardResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ForwarderConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }

    /// Resolves the target URL and payload for `record` without touching the network.
    ///
    /// A missing measurement id or API secret is written as an empty query value; GA4 decides
    /// what to do with the request.
    pub fn prepare(&self, record: &InputRecord) -> PreparedRequest {
        let measurement_id = query_text(record.measurement_id.as_ref());
        let api_secret = query_text(record.mp_secret.as_ref());

        PreparedRequest {
            url: self.config.collect_url(&measurement_id, &api_secret),
            payload: Ga4Event::from_record(record),
        }
    }

    /// Sends one event for `record`. Every failure is folded into the returned outcome.
    pub async fn forward(&self, record: &InputRecord) -> ForwardOutcome {
        match self.try_forward(record).await {
            Ok(()) => ForwardOutcome::success(),
            Err(err) => {
                log::warn!("GA4 event was not delivered: {err}");
                ForwardOutcome::from(err)
            }
        }
    }

    async fn try_forward(&self, record: &InputRecord) -> ForwardResult<()> {
        let request = self.prepare(record);
        let body = serde_json::to_value(&request.payload)
            .map_err(|err| internal_error(format!("failed to encode GA4 payload: {err}")))?;

        log::debug!(
            "sending GA4 event {:?} for client {} to {}",
            request.payload.events.first().and_then(|event| event.name.as_ref()),
            request.payload.client_id,
            self.config.endpoint().as_str()
        );

        let response = self.transport.post_json(&request.url, &body).await?;
        match response.status {
            200 | 204 => Ok(()),
            status => Err(rejected(status)),
        }
    }
}

/// Forwards `record` through `transport` using the default configuration.
pub async fn forward_event(
    record: &InputRecord,
    transport: Arc<dyn HttpTransport>,
) -> ForwardOutcome {
    EventForwarder::with_transport(ForwarderConfig::default(), transport)
        .forward(record)
        .await
}

fn query_text(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::as_text).unwrap_or_default()
}
