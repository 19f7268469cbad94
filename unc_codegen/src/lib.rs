//! Generator for the per-arity propagation procedures in `unc_core`.
//!
//! [`render`](render::render) produces the generated region as text for a
//! given arity ceiling; [`splice`] places that text between the marker lines
//! of an existing source file, leaving the rest of the file alone. Running
//! the generator twice against the same file leaves it unchanged.
//!
//! # Module Structure
//!
//! - [`config`] - Generator configuration
//! - [`error`] - Error types
//! - [`render`] - Procedure and dispatch rendering
//! - [`splice`] - Region location and in-place rewriting

pub mod config;
pub mod error;
pub mod render;
pub mod splice;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use render::render;
pub use splice::Outcome;
