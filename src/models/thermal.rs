//! Thermal models of the cryogenic target.
//!
//! - [`target`]: the jacketed ARTIE-II target (bore, vacuum gap, argon
//!   annulus, foam) and its boil-off time.
//! - [`insulated_pipe`]: the single-walled ARTIE-I target (steel pipe, foam).
//! - [`materials`]: material constants and ambient conditions shared by both.

pub mod insulated_pipe;
pub mod materials;
pub mod target;
