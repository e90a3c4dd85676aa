//! Policy Impact - Deterministic policy-impact simulation for household avatar profiles
//!
//! This library provides:
//! - Typed household profiles (avatars) with CSV cohort loading
//! - Policy specifications as a tagged union over seven policy types
//! - Per-type impact calculators sharing one set of numeric conventions
//! - A stateless async engine with a configurable pacing delay
//! - A parallel cohort runner with aggregate summaries

pub mod avatar;
pub mod policy;
pub mod scenario;
pub mod simulation;

mod models;

// Re-export commonly used types
pub use avatar::{Avatar, EducationLevel, EmploymentStatus, HealthStatus};
pub use policy::{ParamError, PolicyChange, PolicySpec};
pub use scenario::{CohortRunner, CohortSummary};
pub use simulation::{EngineConfig, SimulationEngine, SimulationResult};
