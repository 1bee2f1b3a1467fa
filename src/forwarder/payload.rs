use serde::Serialize;

use crate::forwarder::client_id::resolve_client_id;
use crate::forwarder::constants::ENGAGEMENT_TIME_MSEC;
use crate::forwarder::record::{FieldValue, InputRecord};

/// Request body accepted by `POST /mp/collect`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ga4Event {
    pub client_id: String,
    pub events: Vec<Ga4EventEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ga4EventEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    pub params: EventParams,
}

/// Attribution parameters attached to the event. Absent values are left out of the JSON body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_location: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_referrer: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fbclid: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_source: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_group_id: Option<FieldValue>,
    pub engagement_time_msec: &'static str,
}

impl EventParams {
    pub fn from_record(record: &InputRecord) -> Self {
        Self {
            source: record.utm_source.clone(),
            medium: record.utm_medium.clone(),
            campaign: record.utm_campaign.clone(),
            term: record.utm_term.clone(),
            content: record.utm_content.clone(),
            campaign_id: record.campaign_id.clone(),
            appointment_id: record.appointment_id.clone(),
            page_location: record.page_location.clone(),
            page_referrer: record.page_referrer.clone(),
            fbclid: record.fbclid.clone(),
            session_source: record.session_source.clone(),
            ad_id: record.ad_id.clone(),
            ad_group_id: record.ad_group_id.clone(),
            engagement_time_msec: ENGAGEMENT_TIME_MSEC,
        }
    }
}

impl Ga4Event {
    /// Maps a record onto a single-event payload.
    pub fn from_record(record: &InputRecord) -> Self {
        Self {
            client_id: resolve_client_id(record.ga_client_id.as_ref()),
            events: vec![Ga4EventEntry {
                name: record.event_name.clone(),
                params: EventParams::from_record(record),
            }],
        }
    }
}
