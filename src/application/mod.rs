//! # Application Layer
//!
//! Use-case orchestration on top of the domain, depending on
//! infrastructure only through ports.

pub mod error;
pub mod services;

pub use error::{EstimationError, EstimationResult};
