//! `flowsample` locates a physical coordinate `(x, y, z, t)` on a structured
//! ocean/atmosphere grid and interpolates a scalar or vector field there.
//!
//! The crate is split into the same leaf-first components as the scheme it
//! implements: a horizontal cell locator (rectilinear and curvilinear, with
//! spherical longitude wrap), a vertical locator (depth-only Z-grids and
//! terrain-following S-grids), a time locator (periodic and extrapolating),
//! a set of spatial kernels (bilinear/trilinear/nearest), and a driver that
//! orchestrates all of the above into one field query. A thin vector-field
//! layer sits on top for U/V pairs and their mesh-rotation correction.
//!
//! Grids and field data are borrowed, not owned: callers keep them alive for
//! the duration of a query and thread a small [`Cursor`] through repeated
//! queries as a warm start.

/// The bread-and-butter, shrink-wrapped and ready to use.
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::error::{ErrorCode, SamplerError};
    pub use crate::field::{Field, InterpMethod};
    pub use crate::grid::{Grid, GridCode};
    pub use crate::vector::{temporal_interpolation_uv, temporal_interpolation_uv_rotation};
    pub use crate::field::temporal_interpolation;
}

/// Extended prelude for authoring new grid topologies or spatial kernels.
pub mod authoring {
    pub use crate::prelude::*;
    pub use crate::view::{View2, View3, View4};

    // External material
    pub use log::{debug, trace, warn};
}

mod cursor;
mod error;
mod field;
mod grid;
mod kernel;
mod time;
mod vector;
mod view;

pub use prelude::*;
