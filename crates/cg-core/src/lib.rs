//! cg-core: stable foundation for colorgraph.
//!
//! Contains:
//! - ids (caller node identities and compact arena slots)
//! - color (colour type and first-free selection)
//! - error (shared error types)

pub mod color;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use color::{first_free, Color, UNCOLORED};
pub use error::{CgError, CgResult};
pub use ids::*;
