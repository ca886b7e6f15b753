use crate::builder::{ElectricityProfile, GasProfile, MeterBuilder};
use crate::model::MeterType;
use std::collections::HashMap;
use std::error::Error;
use tracing::debug;

pub type BuilderConstructor = fn(u64, u64) -> MeterBuilder;

/// Explicitly constructed kind-to-constructor table. Pass an instance around
/// instead of relying on process-wide state, so tests can run isolated
/// registries in parallel and new kinds register without touching this type.
pub struct BuilderRegistry {
    constructors: HashMap<String, BuilderConstructor>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registry with the two supported meter kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MeterType::Electricity.as_str(), |vu_id, iter_id| {
            MeterBuilder::new(Box::new(ElectricityProfile), vu_id, iter_id)
        });
        registry.register(MeterType::Gas.as_str(), |vu_id, iter_id| {
            MeterBuilder::new(Box::new(GasProfile), vu_id, iter_id)
        });
        registry
    }

    pub fn register(&mut self, kind: &str, constructor: BuilderConstructor) {
        debug!("Registering meter builder for kind {}", kind);
        self.constructors.insert(kind.to_string(), constructor);
    }

    /// Returns a fresh builder for the kind, or a descriptive error for an
    /// unsupported kind. Never falls back to a default builder.
    pub fn create(
        &self,
        kind: &str,
        vu_id: u64,
        iter_id: u64,
    ) -> Result<MeterBuilder, Box<dyn Error>> {
        match self.constructors.get(kind) {
            Some(constructor) => Ok(constructor(vu_id, iter_id)),
            None => Err(format!("Unsupported meter type: {}", kind).into()),
        }
    }

    pub fn create_for(
        &self,
        meter_type: MeterType,
        vu_id: u64,
        iter_id: u64,
    ) -> Result<MeterBuilder, Box<dyn Error>> {
        self.create(meter_type.as_str(), vu_id, iter_id)
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
