use serde::{Deserialize, Serialize};

/// Profile category codes from the P4 usages event schema. E-prefixed codes
/// apply to electricity connections, G-prefixed to gas.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ProfileCategoryCode {
    E1A,
    E1B,
    E2A,
    E2B,
    E3A,
    E3B,
    E4A,
    E4B,
    G1A,
    G2A,
    G2B,
    G2C,
    GXX,
    GGV,
}
