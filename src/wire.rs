use crate::model::*;
use serde::Serialize;

/// Format marker carried by every structured sub-object on the wire.
#[derive(Clone, Copy, Serialize, Debug)]
pub struct Schema {
    pub tag: u32,
}

impl Default for Schema {
    fn default() -> Self {
        Schema { tag: 0 }
    }
}

// Enum to integer codes, in Avro schema order. Absent symbols fall back to
// the documented default code per enum.

fn label_code(label: Label) -> u8 {
    match label {
        Label::Eneco => 0,
        Label::Oxxio => 1,
        Label::Woonenergie => 2,
        Label::Undefined => 3,
        Label::EnecoBusiness => 4,
    }
}

fn commodity_code(commodity: Option<Commodity>) -> u8 {
    match commodity {
        Some(Commodity::Electricity) | None => 0,
        Some(Commodity::Gas) => 1,
    }
}

fn profile_category_code(code: Option<ProfileCategoryCode>) -> u8 {
    match code {
        Some(ProfileCategoryCode::E1A) | None => 0,
        Some(ProfileCategoryCode::E1B) => 1,
        Some(ProfileCategoryCode::E2A) => 2,
        Some(ProfileCategoryCode::E2B) => 3,
        Some(ProfileCategoryCode::E3A) => 4,
        Some(ProfileCategoryCode::E3B) => 5,
        Some(ProfileCategoryCode::E4A) => 6,
        Some(ProfileCategoryCode::E4B) => 7,
        Some(ProfileCategoryCode::G1A) => 8,
        Some(ProfileCategoryCode::G2A) => 9,
        Some(ProfileCategoryCode::G2B) => 10,
        Some(ProfileCategoryCode::G2C) => 11,
        Some(ProfileCategoryCode::GXX) => 12,
        Some(ProfileCategoryCode::GGV) => 13,
    }
}

fn determined_energy_code(value: Option<DeterminedEnergy>) -> u8 {
    match value {
        Some(DeterminedEnergy::Ami) | None => 0,
        Some(DeterminedEnergy::Azi) => 1,
    }
}

fn source_code(source: Option<Source>) -> u8 {
    match source {
        Some(Source::Actual) | None => 0,
        Some(Source::Estimated) => 1,
        Some(Source::Corrected) => 2,
        Some(Source::Manual) => 3,
        Some(Source::Undefined) => 4,
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireConnectionMetadata {
    pub schema: Schema,
    #[serde(rename = "connectionPointEAN", skip_serializing_if = "Option::is_none")]
    pub connection_point_ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(rename = "gridOperatorEAN", skip_serializing_if = "Option::is_none")]
    pub grid_operator_ean: Option<String>,
    #[serde(rename = "supplierEAN", skip_serializing_if = "Option::is_none")]
    pub supplier_ean: Option<String>,
    pub profile_category_code: u8,
    pub determined_energy_consumption: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireUsagePeriod {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireDayReadingValue {
    pub schema: Schema,
    pub start: f64,
    pub end: f64,
    pub start_source: u8,
    pub end_source: u8,
    pub is_peak: bool,
    pub injection: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireDayReadings {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub values: Vec<WireDayReadingValue>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireIntervalReadingValue {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub consumption: f64,
    pub production: f64,
    pub consumption_source: u8,
    pub production_source: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireIntervalReadings {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub values: Vec<WireIntervalReadingValue>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireReadings {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<WireDayReadings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<WireIntervalReadings>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireVolumeValue {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub consumption: f64,
    pub production: f64,
    pub temperature_correction: f64,
    pub caloric_value: f64,
    pub is_peak: bool,
    pub consumption_source: u8,
    pub production_source: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireVolumeInterval {
    pub schema: Schema,
    pub unit: String,
    pub values: Vec<WireVolumeValue>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireVolumes {
    pub schema: Schema,
    pub interval: WireVolumeInterval,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireData {
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_metadata: Option<WireConnectionMetadata>,
    pub label: u8,
    pub commodity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_period: Option<WireUsagePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readings: Option<WireReadings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<WireVolumes>,
    pub updated_at: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    pub schema: Schema,
    pub event_instance_id: String,
    pub event_name: String,
    pub event_time: String,
    pub event_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_reason: Option<String>,
    pub contains_privacy_data: bool,
    pub data: WireData,
}

/// Exact body shape for POST /Publish: correlation key plus the message with
/// schema tags and numeric enum codes.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublishBody {
    pub key: String,
    pub message: WireMessage,
}

fn convert_connection_metadata(metadata: &ConnectionMetadata) -> WireConnectionMetadata {
    WireConnectionMetadata {
        schema: Schema::default(),
        connection_point_ean: metadata.connection_point_ean.clone(),
        country_code: metadata.country_code.clone(),
        grid_operator_ean: metadata.grid_operator_ean.clone(),
        supplier_ean: metadata.supplier_ean.clone(),
        profile_category_code: profile_category_code(metadata.profile_category_code),
        determined_energy_consumption: determined_energy_code(
            metadata.determined_energy_consumption,
        ),
    }
}

fn convert_usage_period(usage_period: &UsagePeriod) -> WireUsagePeriod {
    WireUsagePeriod {
        schema: Schema::default(),
        date: usage_period.date.clone(),
        timezone: usage_period.timezone.clone(),
        period: usage_period.period.clone(),
        interval: usage_period.interval.clone(),
    }
}

fn convert_day_readings(readings: &DayReadings) -> WireDayReadings {
    let values = readings
        .values
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|value| WireDayReadingValue {
            schema: Schema::default(),
            start: value.start.unwrap_or(0.0),
            end: value.end.unwrap_or(0.0),
            start_source: source_code(value.start_source),
            end_source: source_code(value.end_source),
            is_peak: value.is_peak.unwrap_or(false),
            injection: value.injection.unwrap_or(false),
        })
        .collect();
    WireDayReadings {
        schema: Schema::default(),
        unit: readings.unit.clone(),
        values,
    }
}

fn convert_interval_readings(readings: &IntervalReadings) -> WireIntervalReadings {
    let values = readings
        .values
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|value| WireIntervalReadingValue {
            schema: Schema::default(),
            timestamp: value.timestamp.clone(),
            consumption: value.consumption.unwrap_or(0.0),
            production: value.production.unwrap_or(0.0),
            consumption_source: source_code(value.consumption_source),
            production_source: source_code(value.production_source),
        })
        .collect();
    WireIntervalReadings {
        schema: Schema::default(),
        unit: readings.unit.clone(),
        values,
    }
}

fn convert_readings(readings: &Readings) -> WireReadings {
    WireReadings {
        schema: Schema::default(),
        day: readings.day.as_ref().map(convert_day_readings),
        interval: readings.interval.as_ref().map(convert_interval_readings),
    }
}

fn convert_volumes(volumes: &Volumes) -> WireVolumes {
    let values = volumes
        .interval
        .values
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|value| WireVolumeValue {
            schema: Schema::default(),
            timestamp: value.timestamp.clone(),
            consumption: value.consumption.unwrap_or(0.0),
            production: value.production.unwrap_or(0.0),
            temperature_correction: value.temperature_correction.unwrap_or(0.0),
            caloric_value: value.caloric_value.unwrap_or(0.0),
            is_peak: value.is_peak.unwrap_or(false),
            consumption_source: source_code(value.consumption_source),
            production_source: source_code(value.production_source),
        })
        .collect();
    WireVolumes {
        schema: Schema::default(),
        interval: WireVolumeInterval {
            schema: Schema::default(),
            unit: volumes.interval.unit.clone(),
            values,
        },
    }
}

fn convert_data(data: &MeterData) -> WireData {
    WireData {
        schema: Schema::default(),
        connection_metadata: data
            .connection_metadata
            .as_ref()
            .map(convert_connection_metadata),
        label: label_code(data.label),
        commodity: commodity_code(data.commodity),
        mandate_codes: data.mandate_codes.clone(),
        usage_period: data.usage_period.as_ref().map(convert_usage_period),
        readings: data.readings.as_ref().map(convert_readings),
        volumes: data.volumes.as_ref().map(convert_volumes),
        updated_at: data.updated_at.clone(),
    }
}

fn convert_message(message: &MeterMessage) -> WireMessage {
    WireMessage {
        schema: Schema::default(),
        event_instance_id: message.event_instance_id.clone(),
        event_name: message.event_name.clone(),
        event_time: message.event_time.clone(),
        event_source: message.event_source.clone(),
        event_subject: message.event_subject.clone(),
        event_reason: message.event_reason.clone(),
        contains_privacy_data: message.contains_privacy_data.unwrap_or(false),
        data: convert_data(&message.data),
    }
}

/// Maps an internal payload to the exact shape POST /Publish expects. Pure
/// function; absent nested sub-objects are omitted from the output rather
/// than emitted as marker-only stubs.
pub fn to_publish_body(payload: &MeterPayload) -> PublishBody {
    PublishBody {
        key: payload.key.clone(),
        message: convert_message(&payload.message),
    }
}
