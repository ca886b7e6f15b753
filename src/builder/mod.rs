mod electricity;
mod gas;
mod meter_builder;
mod registry;

pub use crate::builder::electricity::ElectricityProfile;
pub use crate::builder::gas::GasProfile;
pub use crate::builder::meter_builder::{MeterBuilder, MeterProfile};
pub use crate::builder::registry::{BuilderConstructor, BuilderRegistry};
