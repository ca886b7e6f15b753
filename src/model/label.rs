use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Label {
    #[serde(rename = "eneco")]
    Eneco,
    #[serde(rename = "oxxio")]
    Oxxio,
    #[serde(rename = "woonenergie")]
    Woonenergie,
    #[serde(rename = "UNDEFINED")]
    Undefined,
    #[serde(rename = "enecobusiness")]
    EnecoBusiness,
}

impl Default for Label {
    fn default() -> Self {
        Label::Undefined
    }
}
