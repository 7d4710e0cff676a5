//! Effective Inflow Layer Analysis
//!
//! Identifies the effective inflow layer of an atmospheric sounding: the
//! first contiguous band of levels whose lifted parcels are convectively
//! supportive (CAPE >= 100 J/kg and CIN > -250 J/kg). The scan consumes
//! parcel ascent and CAPE/CIN integration through the [`AscentEvaluator`]
//! seam; [`AdiabaticEvaluator`] provides those primitives so the crate is
//! usable stand-alone.
//!
//! ```
//! use inflow_core::{
//!     effective_inflow_layer, AdiabaticEvaluator, Celsius, CoordinateMode,
//!     HectoPascals, Meters, Sounding,
//! };
//!
//! let sounding = Sounding::new(
//!     vec![HectoPascals::new(1000.0), HectoPascals::new(850.0), HectoPascals::new(700.0)],
//!     vec![Meters::new(110.0), Meters::new(1460.0), Meters::new(3010.0)],
//!     vec![Celsius::new(30.0), Celsius::new(18.0), Celsius::new(8.0)],
//!     vec![Celsius::new(24.0), Celsius::new(14.0), Celsius::new(2.0)],
//! )?;
//!
//! let layer = effective_inflow_layer(&sounding, &AdiabaticEvaluator, CoordinateMode::Pressure)?;
//! println!("{layer:?}");
//! # Ok::<(), inflow_core::ScanError>(())
//! ```

// Core types and utilities
pub mod core_types;

// Parcel physics and the evaluation seam
pub mod ascent;
pub mod thermo;

// The effective inflow layer scan
pub mod batch;
pub mod effective_layer;
pub mod error;
pub mod sounding;

// Re-export core types
pub use core_types::{Celsius, HectoPascals, JoulesPerKilogram, Kelvin, Meters};

// Re-export the analysis surface
pub use ascent::{AdiabaticEvaluator, AscentEvaluator};
pub use batch::scan_soundings;
pub use effective_layer::{
    effective_inflow_layer, effective_inflow_scan, CoordinateMode, EffectiveLayer, LayerBound,
    LayerBounds, ScanState, TopBoundary, CAPE_FLOOR, CIN_FLOOR,
};
pub use error::{AscentError, ScanError};
pub use sounding::{Level, Sounding};
