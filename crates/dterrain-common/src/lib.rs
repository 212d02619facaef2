//! # DTerrain Common
//!
//! Value types shared by every DTerrain crate.
//!
//! This crate provides:
//! - Coordinate types (pixel, chunk, local)
//! - `Interval`, the inclusive row range used by destruction
//! - `Shape`, a per-column destruction footprint
//! - `Color`, the RGBA pixel value
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod color;
pub mod coords;
pub mod error;
pub mod interval;
pub mod shape;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::*;
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::interval::*;
    pub use crate::shape::*;
}

pub use prelude::*;
