//! # ARTIE Models
//!
//! Thermal models of the cryogenic liquid-argon target used by the ARTIE
//! neutron-transmission experiment.
//!
//! ## Crate layout
//!
//! - [`models`]: Target models and their [`twine_core::Model`] adapters.
//! - [`support`]: Resistance formulas, numeric constraints, and unit extensions
//!   used by the models.
//!
//! ## Units
//!
//! Every physical value crossing a public API is a [`uom`] quantity, so the
//! unit system (cm, g, s, W, K in the published ARTIE tables) cannot drift between
//! callers. The one exception is [`GeometryConfig`](models::thermal::target::GeometryConfig),
//! which carries raw inch values behind an explicit [`Inches`](models::thermal::target::Inches) tag.

pub mod models;
pub mod support;
