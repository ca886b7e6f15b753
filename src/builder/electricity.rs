use crate::builder::MeterProfile;
use crate::model::*;

/// Electricity meters: kWh day readings, Wh interval readings in quarter-hour
/// granularity, no volumes block.
pub struct ElectricityProfile;

impl MeterProfile for ElectricityProfile {
    fn commodity(&self) -> Commodity {
        Commodity::Electricity
    }

    fn default_profile_category(&self) -> ProfileCategoryCode {
        ProfileCategoryCode::E1A
    }

    fn usage_interval(&self) -> &'static str {
        "PT15M"
    }

    fn day_readings(&self, iter_id: u64) -> DayReadings {
        DayReadings {
            unit: Some("kWh".into()),
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
            unit: Some("Wh".into()),
            interval_duration: Some("PT15M".into()),
            values: Some(vec![IntervalReadingValue {
                timestamp: Some(timestamp.into()),
                consumption: Some(50.0 + iter_id as f64 * 5.0),
                production: Some(0.0),
                consumption_source: Some(Source::Actual),
                production_source: Some(Source::Actual),
                ..Default::default()
            }]),
        }
    }

    fn volumes(&self, _iter_id: u64, _timestamp: &str) -> Option<Volumes> {
        // Electricity meters don't report volumes.
        None
    }
}
