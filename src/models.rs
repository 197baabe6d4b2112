//! Public ARTIE models.
//!
//! # Model structure
//!
//! Each model lives in its own module. Larger models keep their computation
//! in an internal `core` submodule; the public module re-exports the types a
//! caller needs and provides a thin [`twine_core::Model`] adapter over the
//! core API.

pub mod thermal;
