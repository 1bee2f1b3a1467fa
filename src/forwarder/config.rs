use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::forwarder::constants::{COLLECT_ENDPOINT, DEBUG_COLLECT_ENDPOINT};

/// Supported endpoints for the Measurement Protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MeasurementProtocolEndpoint {
    /// Production collection endpoint: <https://www.google-analytics.com/mp/collect>
    #[default]
    Collect,
    /// Debugging endpoint: <https://www.google-analytics.com/debug/mp/collect>
    DebugCollect,
    /// Custom endpoint (primarily for testing).
    Custom(String),
}

impl MeasurementProtocolEndpoint {
    pub fn as_str(&self) -> &str {
        match self {
            MeasurementProtocolEndpoint::Collect => COLLECT_ENDPOINT,
            MeasurementProtocolEndpoint::DebugCollect => DEBUG_COLLECT_ENDPOINT,
            MeasurementProtocolEndpoint::Custom(url) => url,
        }
    }
}

/// How the measurement id and API secret are written into the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Values are embedded exactly as supplied.
    #[default]
    Verbatim,
    /// Every non-alphanumeric byte is percent-encoded.
    PercentEncoded,
}

impl QueryEncoding {
    fn apply(self, value: &str) -> String {
        match self {
            QueryEncoding::Verbatim => value.to_string(),
            QueryEncoding::PercentEncoded => {
                utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
            }
        }
    }
}

/// Network configuration for the event forwarder.
///
/// Credentials travel with each record; this only describes where and how requests are sent.
#[derive(Clone, Debug, Default)]
pub struct ForwarderConfig {
    endpoint: MeasurementProtocolEndpoint,
    query_encoding: QueryEncoding,
    timeout: Option<Duration>,
}

impl ForwarderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: MeasurementProtocolEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    /// Bounds the whole request. Requests are unbounded unless this is set.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &MeasurementProtocolEndpoint {
        &self.endpoint
    }

    pub fn query_encoding(&self) -> QueryEncoding {
        self.query_encoding
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the collection URL carrying the measurement id and API secret.
    pub fn collect_url(&self, measurement_id: &str, api_secret: &str) -> String {
        format!(
            "{}?measurement_id={}&api_secret={}",
            self.endpoint.as_str(),
            self.query_encoding.apply(measurement_id),
            self.query_encoding.apply(api_secret)
        )
    }
}
