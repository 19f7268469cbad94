//! Uncertainty Common Library
//!
//! Shared constants and configuration loading for the uncertainty
//! propagation workspace.
//!
//! # Module Structure
//!
//! - [`consts`] - Arity ceiling and generated-region markers
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience

pub mod config;
pub mod consts;
pub mod prelude;
