use crate::builder::MeterProfile;
use crate::model::*;

/// Typical caloric value for Dutch natural gas in MJ/m3.
const CALORIC_VALUE: f64 = 35.17;

/// Gas meters: MTQ day readings, DM3 interval readings and volumes in hourly
/// granularity, temperature correction and caloric value on every volume
/// entry.
pub struct GasProfile;

impl GasProfile {
    fn consumption(iter_id: u64) -> f64 {
        // Gas consumption runs lower than electricity.
        10.0 + iter_id as f64 * 0.5
    }
}

impl MeterProfile for GasProfile {
    fn commodity(&self) -> Commodity {
        Commodity::Gas
    }

    fn default_profile_category(&self) -> ProfileCategoryCode {
        ProfileCategoryCode::G1A
    }

    fn usage_interval(&self) -> &'static str {
        "PT1H"
    }

    fn day_readings(&self, iter_id: u64) -> DayReadings {
        DayReadings {
            unit: Some("MTQ".into()),
            interval_duration: Some("P1D".into()),
            values: Some(vec![DayReadingValue {
                start: Some(0.0),
                end: Some(1000.0 + iter_id as f64 * 10.0),
                start_source: Some(Source::Actual),
                end_source: Some(Source::Actual),
                is_peak: Some(false),
                injection: Some(false),
                ..Default::default()
            }]),
        }
    }

    fn interval_readings(&self, iter_id: u64, timestamp: &str) -> IntervalReadings {
        IntervalReadings {
            unit: Some("DM3".into()),
            interval_duration: Some("PT1H".into()),
            values: Some(vec![IntervalReadingValue {
                timestamp: Some(timestamp.into()),
                consumption: Some(Self::consumption(iter_id)),
                production: Some(0.0),
                consumption_source: Some(Source::Actual),
                production_source: Some(Source::Actual),
                ..Default::default()
            }]),
        }
    }

    fn volumes(&self, iter_id: u64, timestamp: &str) -> Option<Volumes> {
        Some(Volumes {
            interval: VolumeInterval {
                unit: "DM3".into(),
                interval_duration: Some("PT1H".into()),
                values: Some(vec![VolumeValue {
                    timestamp: Some(timestamp.into()),
                    consumption: Some(Self::consumption(iter_id)),
                    production: Some(0.0),
                    temperature_correction: Some(1.0),
                    caloric_value: Some(CALORIC_VALUE),
                    is_peak: Some(false),
                    consumption_source: Some(Source::Actual),
                    production_source: Some(Source::Actual),
                }]),
            },
        })
    }
}
