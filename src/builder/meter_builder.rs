use crate::model::*;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Kind-specific behavior plugged into [`MeterBuilder`]: commodity code,
/// units, defaults and synthetic reading values.
pub trait MeterProfile {
    fn commodity(&self) -> Commodity;
    fn default_profile_category(&self) -> ProfileCategoryCode;
    /// ISO 8601 duration of one interval sample (PT15M for electricity,
    /// PT1H for gas).
    fn usage_interval(&self) -> &'static str;
    fn day_readings(&self, iter_id: u64) -> DayReadings;
    fn interval_readings(&self, iter_id: u64, timestamp: &str) -> IntervalReadings;
    fn volumes(&self, iter_id: u64, timestamp: &str) -> Option<Volumes>;
}

/// Assembles a [`MeterPayload`] through a fixed sequence of optional
/// augmentation steps. The vu/iter seeds only feed generated identifiers and
/// numeric offsets, so repeated iterations produce distinguishable but
/// structurally identical payloads. No step fails.
pub struct MeterBuilder {
    payload: MeterPayload,
    vu_id: u64,
    iter_id: u64,
    event_time: String,
    timestamp: String,
    profile: Box<dyn MeterProfile>,
}

impl MeterBuilder {
    pub fn new(profile: Box<dyn MeterProfile>, vu_id: u64, iter_id: u64) -> Self {
        // Timestamps are generated once per builder instance. The event time
        // is normalized to 00:00:00Z of the current day.
        let now = Utc::now();
        let event_time = format!("{}T00:00:00Z", now.format("%Y-%m-%d"));
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let updated_at = timestamp.clone();

        let payload = MeterPayload {
            key: format!("test-key-{}-{}", vu_id, iter_id),
            message: MeterMessage {
                event_instance_id: Uuid::new_v4().to_string(),
                event_name: "ProcessedP4UsagesDayAligned".into(),
                event_time: event_time.clone(),
                event_source: "MTR".into(),
                event_subject: Some(format!("meter-{}-{}", vu_id, iter_id)),
                event_reason: Some("NEW_READING_RECEIVED".into()),
                contains_privacy_data: Some(false),
                data: MeterData {
                    label: Label::Undefined,
                    commodity: Some(profile.commodity()),
                    updated_at,
                    ..Default::default()
                },
            },
        };

        Self {
            payload,
            vu_id,
            iter_id,
            event_time,
            timestamp,
            profile,
        }
    }

    pub fn with_connection_metadata(
        mut self,
        profile_category_code: Option<ProfileCategoryCode>,
        determined_energy_consumption: Option<DeterminedEnergy>,
        is_dual_tariff_meter: Option<bool>,
    ) -> Self {
        self.payload.message.data.connection_metadata = Some(ConnectionMetadata {
            connection_point_ean: Some(format!("EAN-{}-{}", self.vu_id, self.iter_id)),
            country_code: Some("NL".into()),
            grid_operator_ean: Some(format!("GRID-{}", self.vu_id)),
            supplier_ean: Some(format!("SUPPLIER-{}", self.vu_id)),
            profile_category_code: Some(
                profile_category_code.unwrap_or_else(|| self.profile.default_profile_category()),
            ),
            determined_energy_consumption: Some(
                determined_energy_consumption.unwrap_or(DeterminedEnergy::Ami),
            ),
            is_dual_tariff_meter,
        });
        self
    }

    pub fn with_label_and_commodity(
        mut self,
        label: Option<Label>,
        commodity: Option<Commodity>,
    ) -> Self {
        if let Some(label) = label {
            self.payload.message.data.label = label;
        }
        if let Some(commodity) = commodity {
            self.payload.message.data.commodity = Some(commodity);
        }
        self
    }

    pub fn with_mandate_codes(mut self) -> Self {
        self.payload.message.data.mandate_codes =
            Some(vec![format!("MANDATE-{}-{}", self.vu_id, self.iter_id)]);
        self
    }

    /// Usage period date stays in sync with the event time day. The interval
    /// duration comes from the profile, so gas payloads always report PT1H.
    pub fn with_usage_period(mut self) -> Self {
        let date = self
            .event_time
            .split('T')
            .next()
            .unwrap_or(&self.event_time)
            .to_string();
        self.payload.message.data.usage_period = Some(UsagePeriod {
            date: Some(date),
            timezone: Some(chrono_tz::Europe::Amsterdam.name().into()),
            period: Some("P1D".into()),
            interval: Some(self.profile.usage_interval().into()),
        });
        self
    }

    pub fn with_day_readings(mut self) -> Self {
        let day = self.profile.day_readings(self.iter_id);
        self.payload
            .message
            .data
            .readings
            .get_or_insert_with(Readings::default)
            .day = Some(day);
        self
    }

    pub fn with_interval_readings(mut self) -> Self {
        let interval = self.profile.interval_readings(self.iter_id, &self.timestamp);
        self.payload
            .message
            .data
            .readings
            .get_or_insert_with(Readings::default)
            .interval = Some(interval);
        self
    }

    pub fn with_volumes(mut self) -> Self {
        if let Some(volumes) = self.profile.volumes(self.iter_id, &self.timestamp) {
            self.payload.message.data.volumes = Some(volumes);
        }
        self
    }

    pub fn build(self) -> MeterPayload {
        self.payload
    }
}
