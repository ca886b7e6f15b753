use crate::model::{Commodity, DeterminedEnergy, Label, ProfileCategoryCode, Source};
use serde::{Deserialize, Serialize};

/// Site and grid identifiers for the connection a payload reports on.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionMetadata {
    #[serde(rename = "connectionPointEAN", skip_serializing_if = "Option::is_none")]
    pub connection_point_ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(rename = "gridOperatorEAN", skip_serializing_if = "Option::is_none")]
    pub grid_operator_ean: Option<String>,
    #[serde(rename = "supplierEAN", skip_serializing_if = "Option::is_none")]
    pub supplier_ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_category_code: Option<ProfileCategoryCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determined_energy_consumption: Option<DeterminedEnergy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dual_tariff_meter: Option<bool>,
}

/// Usage period: date is YYYY-MM-DD, timezone a tzdata name, period and
/// interval ISO 8601 durations (e.g. P1D, PT15M).
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UsagePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

/// Daily cumulative start/end reading.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayReadingValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_peak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_correction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_value: Option<f64>,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayReadings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<DayReadingValue>>,
}

/// Consumption/production sample for one interval; timestamp marks the start
/// of the interval.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IntervalReadingValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption_source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_peak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_correction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_value: Option<f64>,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IntervalReadings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<IntervalReadingValue>>,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Readings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DayReadings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<IntervalReadings>,
}

/// Volume sample; gas payloads carry temperature correction and caloric value
/// on every entry.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VolumeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_correction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_peak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption_source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_source: Option<Source>,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInterval {
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<VolumeValue>>,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Volumes {
    pub interval: VolumeInterval,
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeterData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_metadata: Option<ConnectionMetadata>,
    #[serde(default)]
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity: Option<Commodity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_period: Option<UsagePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readings: Option<Readings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Volumes>,
    pub updated_at: String,
}
