use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Commodity {
    #[serde(rename = "E")]
    Electricity,
    #[serde(rename = "G")]
    Gas,
}
