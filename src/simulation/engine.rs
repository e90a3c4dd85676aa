//! Simulation engine: dispatch and pacing
//!
//! The engine owns no state beyond its configuration. Each simulation is a
//! pure function of the household and the policy, dispatched on the policy
//! change variant; the configured processing delay paces result delivery for
//! interactive callers without touching the arithmetic.

use std::time::Duration;

use crate::avatar::Avatar;
use crate::models;
use crate::policy::{PolicyChange, PolicySpec};
use crate::simulation::result::SimulationResult;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pause between accepting a simulation and delivering its result.
    /// Purely pacing; the outcome is identical at any setting.
    pub processing_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_secs(2),
        }
    }
}

impl EngineConfig {
    /// Configuration with the pacing pause disabled, for batch work and tests
    pub fn no_delay() -> Self {
        Self {
            processing_delay: Duration::ZERO,
        }
    }
}

/// Stateless policy-impact simulation engine
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: EngineConfig,
}

impl SimulationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Simulate one policy against one household, pacing delivery by the
    /// configured processing delay
    ///
    /// Cancel-safe: dropping the future before completion does no work and
    /// leaves nothing behind.
    pub async fn simulate(&self, avatar: &Avatar, policy: &PolicySpec) -> SimulationResult {
        if !self.config.processing_delay.is_zero() {
            tokio::time::sleep(self.config.processing_delay).await;
        }
        self.simulate_now(avatar, policy)
    }

    /// Simulate without the pacing pause
    ///
    /// The synchronous entry point used by batch runners; identical output
    /// to [`SimulationEngine::simulate`].
    pub fn simulate_now(&self, avatar: &Avatar, policy: &PolicySpec) -> SimulationResult {
        log::debug!(
            "simulating `{}` ({}) for household `{}`",
            policy.name,
            policy.change.kind(),
            avatar.name
        );

        match &policy.change {
            PolicyChange::Tax(params) => models::tax::simulate(avatar, params),
            PolicyChange::Healthcare(params) => models::healthcare::simulate(avatar, params),
            PolicyChange::Education(params) => models::education::simulate(avatar, params),
            PolicyChange::Housing(params) => models::housing::simulate(avatar, params),
            PolicyChange::Employment(params) => models::employment::simulate(avatar, params),
            PolicyChange::SocialSecurity(params) => {
                models::social_security::simulate(avatar, params)
            }
            PolicyChange::Other(params) => models::generic::simulate(avatar, params),
        }
    }
}
