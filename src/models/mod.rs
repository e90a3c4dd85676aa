//! Per-policy-type impact calculators
//!
//! One module per policy type. Each exposes a pure `simulate` function from
//! a household profile and typed parameters to a complete result; the engine
//! dispatches on the policy change variant. All calculators round through
//! the shared conventions in the simulation module.

pub(crate) mod education;
pub(crate) mod employment;
pub(crate) mod generic;
pub(crate) mod healthcare;
pub(crate) mod housing;
pub(crate) mod social_security;
pub(crate) mod tax;
