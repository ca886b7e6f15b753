use crate::builder::BuilderRegistry;
use crate::model::*;
use std::error::Error;

/// Overrides for the standard builder chain.
#[derive(Clone, Copy, Default, Debug)]
pub struct PayloadOptions {
    pub profile_category_code: Option<ProfileCategoryCode>,
    pub determined_energy_consumption: Option<DeterminedEnergy>,
    pub is_dual_tariff_meter: Option<bool>,
    pub label: Option<Label>,
}

/// Standard builder chain: connection metadata, label, mandate codes, usage
/// period, day readings, interval readings, volumes.
fn build_standard_payload(
    registry: &BuilderRegistry,
    meter_type: MeterType,
    vu_id: u64,
    iter_id: u64,
    options: PayloadOptions,
) -> Result<MeterPayload, Box<dyn Error>> {
    let payload = registry
        .create_for(meter_type, vu_id, iter_id)?
        .with_connection_metadata(
            options.profile_category_code,
            options.determined_energy_consumption,
            options.is_dual_tariff_meter,
        )
        .with_label_and_commodity(options.label, None)
        .with_mandate_codes()
        .with_usage_period()
        .with_day_readings()
        .with_interval_readings()
        .with_volumes()
        .build();
    Ok(payload)
}

pub fn generate_meter_payload(
    registry: &BuilderRegistry,
    meter_type: MeterType,
    vu_id: u64,
    iter_id: u64,
) -> Result<MeterPayload, Box<dyn Error>> {
    build_standard_payload(registry, meter_type, vu_id, iter_id, PayloadOptions::default())
}

/// Electricity payload matching the documented example shape: E1B, AZI,
/// dual-tariff, eneco label.
pub fn generate_electricity_payload(
    registry: &BuilderRegistry,
    vu_id: u64,
    iter_id: u64,
) -> Result<MeterPayload, Box<dyn Error>> {
    build_standard_payload(
        registry,
        MeterType::Electricity,
        vu_id,
        iter_id,
        PayloadOptions {
            profile_category_code: Some(ProfileCategoryCode::E1B),
            determined_energy_consumption: Some(DeterminedEnergy::Azi),
            is_dual_tariff_meter: Some(true),
            label: Some(Label::Eneco),
        },
    )
}

/// Gas payload: eneco label, G1A, MTQ/DM3 units, PT1H granularity.
pub fn generate_gas_payload(
    registry: &BuilderRegistry,
    vu_id: u64,
    iter_id: u64,
) -> Result<MeterPayload, Box<dyn Error>> {
    build_standard_payload(
        registry,
        MeterType::Gas,
        vu_id,
        iter_id,
        PayloadOptions {
            label: Some(Label::Eneco),
            ..Default::default()
        },
    )
}

fn electricity_interval_value(timestamp: &str, consumption: f64) -> IntervalReadingValue {
    IntervalReadingValue {
        timestamp: Some(timestamp.into()),
        consumption: Some(consumption),
        production: Some(0.0),
        is_peak: Some(false),
        consumption_source: Some(Source::Actual),
        production_source: Some(Source::Actual),
        ..Default::default()
    }
}

fn electricity_volume_value(timestamp: &str, consumption: f64) -> VolumeValue {
    VolumeValue {
        timestamp: Some(timestamp.into()),
        consumption: Some(consumption),
        production: Some(0.0),
        is_peak: Some(false),
        consumption_source: Some(Source::Actual),
        production_source: Some(Source::Actual),
        ..Default::default()
    }
}

/// Exact match to the documented electricity example event.
pub fn electricity_example_payload() -> MeterPayload {
    let samples = [
        ("2026-01-23T00:00:00.000+0100", 27.0),
        ("2026-01-23T00:15:00.000+0100", 35.0),
        ("2026-01-23T23:30:00.000+0100", 14.0),
        ("2026-01-23T23:45:00.000+0100", 20.0),
    ];

    MeterPayload {
        key: "example-electricity-key".into(),
        message: MeterMessage {
            event_instance_id: "de53fdd3-1960-414f-8c5f-bed3d6a099f9".into(),
            event_name: "ProcessedP4UsagesDayAligned".into(),
            event_time: "2026-01-28T16:39:27.304+01:00".into(),
            event_source: "MTR".into(),
            event_subject: Some("871689290600044291".into()),
            event_reason: None,
            contains_privacy_data: Some(true),
            data: MeterData {
                connection_metadata: Some(ConnectionMetadata {
                    connection_point_ean: Some("871689290600044291".into()),
                    country_code: Some("NL".into()),
                    grid_operator_ean: Some("8716892000005".into()),
                    supplier_ean: Some("8714252007107".into()),
                    profile_category_code: Some(ProfileCategoryCode::E1B),
                    determined_energy_consumption: Some(DeterminedEnergy::Azi),
                    is_dual_tariff_meter: Some(true),
                }),
                label: Label::Eneco,
                commodity: Some(Commodity::Electricity),
                mandate_codes: Some(vec!["INT_EN".into(), "ISMA_EN".into()]),
                usage_period: Some(UsagePeriod {
                    date: Some("2026-01-23".into()),
                    timezone: Some("Europe/Amsterdam".into()),
                    period: None,
                    interval: None,
                }),
                readings: Some(Readings {
                    day: Some(DayReadings {
                        unit: Some("kWh".into()),
                        interval_duration: Some("P1D".into()),
                        values: Some(vec![
                            DayReadingValue {
                                start: Some(6395000.0),
                                end: Some(6397000.0),
                                start_source: Some(Source::Corrected),
                                end_source: Some(Source::Actual),
                                is_peak: Some(true),
                                injection: Some(false),
                                ..Default::default()
                            },
                            DayReadingValue {
                                start: Some(5610000.0),
                                end: Some(5611000.0),
                                start_source: Some(Source::Corrected),
                                end_source: Some(Source::Actual),
                                is_peak: Some(false),
                                injection: Some(false),
                                ..Default::default()
                            },
                        ]),
                    }),
                    interval: Some(IntervalReadings {
                        unit: Some("Wh".into()),
                        interval_duration: Some("PT15M".into()),
                        values: Some(
                            samples
                                .iter()
                                .map(|(timestamp, consumption)| {
                                    electricity_interval_value(timestamp, *consumption)
                                })
                                .collect(),
                        ),
                    }),
                }),
                volumes: Some(Volumes {
                    interval: VolumeInterval {
                        unit: "Wh".into(),
                        interval_duration: Some("PT15M".into()),
                        values: Some(
                            samples
                                .iter()
                                .map(|(timestamp, consumption)| {
                                    electricity_volume_value(timestamp, *consumption)
                                })
                                .collect(),
                        ),
                    },
                }),
                updated_at: "2025-11-01T23:00:00.000+0000".into(),
            },
        },
    }
}

const GAS_CALORIC_VALUE: f64 = 31.649999618530273;

fn gas_interval_value(timestamp: &str, consumption: f64) -> IntervalReadingValue {
    IntervalReadingValue {
        timestamp: Some(timestamp.into()),
        consumption: Some(consumption),
        production: None,
        temperature_correction: Some(0.0),
        caloric_value: Some(GAS_CALORIC_VALUE),
        is_peak: None,
        consumption_source: Some(Source::Actual),
        production_source: None,
    }
}

fn gas_volume_value(timestamp: &str, consumption: f64) -> VolumeValue {
    VolumeValue {
        timestamp: Some(timestamp.into()),
        consumption: Some(consumption),
        production: None,
        temperature_correction: Some(0.0),
        caloric_value: Some(GAS_CALORIC_VALUE),
        is_peak: None,
        consumption_source: Some(Source::Actual),
        production_source: None,
    }
}

/// Exact match to the documented gas example event.
pub fn gas_example_payload() -> MeterPayload {
    let samples = [
        ("2025-10-16T08:00:00.000+0000", 96.0),
        ("2025-10-17T23:00:00.000+0000", 30.0),
    ];

    MeterPayload {
        key: "example-gas-key".into(),
        message: MeterMessage {
            event_instance_id: "f0f639bd-63e9-4e0c-9036-460fdae17423".into(),
            event_name: "ProcessedP4UsagesDayAligned".into(),
            event_time: "2025-10-17T00:00:00+01:00".into(),
            event_source: "MTR".into(),
            event_subject: Some("8716912020002XXXXX".into()),
            event_reason: Some("NEW_READING_RECEIVED".into()),
            contains_privacy_data: Some(true),
            data: MeterData {
                connection_metadata: Some(ConnectionMetadata {
                    connection_point_ean: Some("8716912020002XXXXX".into()),
                    country_code: Some("NL".into()),
                    grid_operator_ean: Some("8716912XXXXX".into()),
                    supplier_ean: Some("8717185XXXXX".into()),
                    profile_category_code: Some(ProfileCategoryCode::G1A),
                    determined_energy_consumption: None,
                    is_dual_tariff_meter: None,
                }),
                label: Label::Eneco,
                commodity: Some(Commodity::Gas),
                mandate_codes: Some(vec!["DP_INTE_EN".into(), "DP_ISMA_EN".into()]),
                usage_period: Some(UsagePeriod {
                    date: Some("2025-10-17".into()),
                    timezone: Some("Europe/Amsterdam".into()),
                    period: None,
                    interval: None,
                }),
                readings: Some(Readings {
                    day: Some(DayReadings {
                        unit: Some("MTQ".into()),
                        interval_duration: Some("P1D".into()),
                        values: Some(vec![DayReadingValue {
                            start: Some(2455.0),
                            end: Some(2460.0),
                            start_source: Some(Source::Actual),
                            end_source: Some(Source::Actual),
                            temperature_correction: Some(0.0),
                            caloric_value: Some(GAS_CALORIC_VALUE),
                            is_peak: None,
                            injection: None,
                        }]),
                    }),
                    interval: Some(IntervalReadings {
                        unit: Some("DM3".into()),
                        interval_duration: Some("PT1H".into()),
                        values: Some(
                            samples
                                .iter()
                                .map(|(timestamp, consumption)| {
                                    gas_interval_value(timestamp, *consumption)
                                })
                                .collect(),
                        ),
                    }),
                }),
                volumes: Some(Volumes {
                    interval: VolumeInterval {
                        unit: "DM3".into(),
                        interval_duration: Some("PT1H".into()),
                        values: Some(
                            samples
                                .iter()
                                .map(|(timestamp, consumption)| {
                                    gas_volume_value(timestamp, *consumption)
                                })
                                .collect(),
                        ),
                    },
                }),
                updated_at: "2025-11-01T23:00:00.000+0000".into(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn generated_payload_matches_requested_meter_type() {
        let registry = BuilderRegistry::with_defaults();

        let_assert!(Ok(payload) = generate_meter_payload(&registry, MeterType::Gas, 5, 2));
        check!(payload.message.data.commodity == Some(Commodity::Gas));
        check!(payload.key == "test-key-5-2");

        let_assert!(
            Ok(payload) = generate_meter_payload(&registry, MeterType::Electricity, 5, 2)
        );
        check!(payload.message.data.commodity == Some(Commodity::Electricity));
    }

    #[test]
    fn electricity_generator_applies_example_overrides() {
        let registry = BuilderRegistry::with_defaults();

        let_assert!(Ok(payload) = generate_electricity_payload(&registry, 1, 1));
        check!(payload.message.data.label == Label::Eneco);
        let_assert!(Some(metadata) = &payload.message.data.connection_metadata);
        check!(metadata.profile_category_code == Some(ProfileCategoryCode::E1B));
        check!(metadata.determined_energy_consumption == Some(DeterminedEnergy::Azi));
        check!(metadata.is_dual_tariff_meter == Some(true));
    }

    #[test]
    fn gas_generator_keeps_gas_defaults() {
        let registry = BuilderRegistry::with_defaults();

        let_assert!(Ok(payload) = generate_gas_payload(&registry, 1, 1));
        check!(payload.message.data.label == Label::Eneco);
        let_assert!(Some(metadata) = &payload.message.data.connection_metadata);
        check!(metadata.profile_category_code == Some(ProfileCategoryCode::G1A));
        let_assert!(Some(usage_period) = &payload.message.data.usage_period);
        check!(usage_period.interval.as_deref() == Some("PT1H"));
    }

    #[test]
    fn example_payloads_match_documented_identifiers() {
        let electricity = electricity_example_payload();
        check!(
            electricity.message.event_instance_id == "de53fdd3-1960-414f-8c5f-bed3d6a099f9"
        );
        check!(electricity.message.data.mandate_codes.as_deref().unwrap().len() == 2);

        let gas = gas_example_payload();
        check!(gas.message.event_instance_id == "f0f639bd-63e9-4e0c-9036-460fdae17423");
        let_assert!(Some(volumes) = &gas.message.data.volumes);
        check!(volumes.interval.unit == "DM3");
        check!(volumes.interval.interval_duration.as_deref() == Some("PT1H"));
    }
}
