use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum MeterType {
    #[serde(rename = "electricity")]
    Electricity,
    #[serde(rename = "gas")]
    Gas,
}

impl MeterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeterType::Electricity => "electricity",
            MeterType::Gas => "gas",
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
