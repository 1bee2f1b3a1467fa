use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::forwarder::error::{invalid_argument, ForwardResult};

/// A single scalar supplied by the hosting automation for one record key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
}

impl FieldValue {
    /// Renders the value as text; numbers use their JSON representation.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => number.to_string(),
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Number::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(Number::from(value))
    }
}

/// The flat record handed over by the hosting automation.
///
/// Every consumed key is optional. Keys outside this schema are ignored when deserializing and
/// JSON `null` reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InputRecord {
    pub ga_client_id: Option<FieldValue>,
    pub measurement_id: Option<FieldValue>,
    pub mp_secret: Option<FieldValue>,
    pub event_name: Option<FieldValue>,
    pub utm_source: Option<FieldValue>,
    pub utm_medium: Option<FieldValue>,
    pub utm_campaign: Option<FieldValue>,
    pub utm_term: Option<FieldValue>,
    pub utm_content: Option<FieldValue>,
    pub campaign_id: Option<FieldValue>,
    pub appointment_id: Option<FieldValue>,
    pub page_location: Option<FieldValue>,
    pub page_referrer: Option<FieldValue>,
    pub fbclid: Option<FieldValue>,
    pub session_source: Option<FieldValue>,
    pub ad_id: Option<FieldValue>,
    pub ad_group_id: Option<FieldValue>,
}

impl InputRecord {
    pub fn from_json_str(json: &str) -> ForwardResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| invalid_argument(format!("input record is not valid JSON: {err}")))
    }

    pub fn from_json_value(value: Value) -> ForwardResult<Self> {
        serde_json::from_value(value).map_err(|err| {
            invalid_argument(format!("input record has an unexpected shape: {err}"))
        })
    }
}
