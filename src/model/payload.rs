use crate::model::MeterData;
use serde::{Deserialize, Serialize};

/// Event envelope for one day-aligned P4 usages report. Timestamps are kept
/// as RFC 3339 strings so example payloads pass through the wire mapper
/// byte-for-byte.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeterMessage {
    pub event_instance_id: String,
    pub event_name: String,
    pub event_time: String,
    pub event_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_privacy_data: Option<bool>,
    pub data: MeterData,
}

/// Full publish payload: a caller-supplied correlation key plus the message.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeterPayload {
    pub key: String,
    pub message: MeterMessage,
}
