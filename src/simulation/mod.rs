//! Simulation engine, shared numeric conventions, and result types

mod engine;
pub(crate) mod math;
mod result;

pub use engine::{EngineConfig, SimulationEngine};
pub use result::{
    BreakdownItem, FinancialImpact, ImpactArea, LongTermEffects, QualityOfLife, SimulationResult,
};
