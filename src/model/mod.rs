mod commodity;
mod data;
mod determined_energy;
mod label;
mod meter_type;
mod payload;
mod profile_category_code;
mod source;

pub use crate::model::commodity::Commodity;
pub use crate::model::data::{
    ConnectionMetadata, DayReadingValue, DayReadings, IntervalReadingValue, IntervalReadings,
    MeterData, Readings, UsagePeriod, VolumeInterval, VolumeValue, Volumes,
};
pub use crate::model::determined_energy::DeterminedEnergy;
pub use crate::model::label::Label;
pub use crate::model::meter_type::MeterType;
pub use crate::model::payload::{MeterMessage, MeterPayload};
pub use crate::model::profile_category_code::ProfileCategoryCode;
pub use crate::model::source::Source;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json;

    fn gas_payload() -> MeterPayload {
        MeterPayload {
            key: "test-key-3-7".into(),
            message: MeterMessage {
                event_instance_id: "cc6e17bb-fd60-4dde-acc3-0cda7d752acc".into(),
                event_name: "ProcessedP4UsagesDayAligned".into(),
                event_time: "2026-08-30T00:00:00Z".into(),
                event_source: "MTR".into(),
                event_subject: Some("meter-3-7".into()),
                event_reason: Some("NEW_READING_RECEIVED".into()),
                contains_privacy_data: Some(false),
                data: MeterData {
                    connection_metadata: None,
                    label: Label::Eneco,
                    commodity: Some(Commodity::Gas),
                    mandate_codes: None,
                    usage_period: Some(UsagePeriod {
                        date: Some("2026-08-30".into()),
                        timezone: Some("Europe/Amsterdam".into()),
                        period: Some("P1D".into()),
                        interval: Some("PT1H".into()),
                    }),
                    readings: None,
                    volumes: None,
                    updated_at: "2026-08-30T06:00:00Z".into(),
                },
            },
        }
    }

    #[test]
    fn to_json() {
        assert_eq!(
            serde_json::to_string_pretty(&gas_payload()).unwrap(),
            r#"{
  "key": "test-key-3-7",
  "message": {
    "eventInstanceId": "cc6e17bb-fd60-4dde-acc3-0cda7d752acc",
    "eventName": "ProcessedP4UsagesDayAligned",
    "eventTime": "2026-08-30T00:00:00Z",
    "eventSource": "MTR",
    "eventSubject": "meter-3-7",
    "eventReason": "NEW_READING_RECEIVED",
    "containsPrivacyData": false,
    "data": {
      "label": "eneco",
      "commodity": "G",
      "usagePeriod": {
        "date": "2026-08-30",
        "timezone": "Europe/Amsterdam",
        "period": "P1D",
        "interval": "PT1H"
      },
      "updatedAt": "2026-08-30T06:00:00Z"
    }
  }
}"#
        );
    }

    #[test]
    fn from_json() {
        let payload = serde_json::from_str::<MeterPayload>(
            r#"{
  "key": "test-key-3-7",
  "message": {
    "eventInstanceId": "cc6e17bb-fd60-4dde-acc3-0cda7d752acc",
    "eventName": "ProcessedP4UsagesDayAligned",
    "eventTime": "2026-08-30T00:00:00Z",
    "eventSource": "MTR",
    "eventSubject": "meter-3-7",
    "eventReason": "NEW_READING_RECEIVED",
    "containsPrivacyData": false,
    "data": {
      "label": "eneco",
      "commodity": "G",
      "usagePeriod": {
        "date": "2026-08-30",
        "timezone": "Europe/Amsterdam",
        "period": "P1D",
        "interval": "PT1H"
      },
      "updatedAt": "2026-08-30T06:00:00Z"
    }
  }
}"#,
        )
        .unwrap();

        assert_eq!(payload.key, "test-key-3-7");
        assert_eq!(payload.message.event_name, "ProcessedP4UsagesDayAligned");
        assert_eq!(payload.message.event_source, "MTR");
        assert_eq!(payload.message.data.label, Label::Eneco);
        assert_eq!(payload.message.data.commodity, Some(Commodity::Gas));
        assert_eq!(
            payload
                .message
                .data
                .usage_period
                .as_ref()
                .unwrap()
                .interval
                .as_deref(),
            Some("PT1H")
        );
        assert_eq!(payload.message.data.updated_at, "2026-08-30T06:00:00Z");
    }

    #[test]
    fn label_defaults_to_undefined_when_missing() {
        let data =
            serde_json::from_str::<MeterData>(r#"{ "updatedAt": "2026-08-30T06:00:00Z" }"#)
                .unwrap();

        assert_eq!(data.label, Label::Undefined);
    }
}
