use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum DeterminedEnergy {
    #[serde(rename = "AMI")]
    Ami,
    #[serde(rename = "AZI")]
    Azi,
}
