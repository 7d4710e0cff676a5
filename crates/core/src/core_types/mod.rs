//! Core data types shared across the sounding analysis.

pub mod units;

pub use units::{Celsius, HectoPascals, JoulesPerKilogram, Kelvin, Meters};
