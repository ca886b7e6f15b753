use serde::{Deserialize, Serialize};

/// Provenance of a reading value.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Source {
    #[serde(rename = "ACTUAL")]
    Actual,
    #[serde(rename = "ESTIMATED")]
    Estimated,
    #[serde(rename = "CORRECTED")]
    Corrected,
    #[serde(rename = "MANUAL")]
    Manual,
    #[serde(rename = "UNDEFINED")]
    Undefined,
}
