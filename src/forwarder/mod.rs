mod api;
mod client_id;
mod config;
pub mod constants;
pub mod error;
mod payload;
mod record;
mod transport;

pub use api::{forward_event, EventForwarder, ForwardOutcome, ForwardStatus, PreparedRequest};
pub use client_id::resolve_client_id;
pub use config::{ForwarderConfig, MeasurementProtocolEndpoint, QueryEncoding};
pub use payload::{EventParams, Ga4Event, Ga4EventEntry};
pub use record::{FieldValue, InputRecord};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
