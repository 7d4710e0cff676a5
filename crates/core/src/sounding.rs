//! A single-column atmospheric sounding.
//!
//! Four co-indexed profiles (pressure, height, temperature, dew point)
//! ordered bottom-up: index 0 is the lowest level and pressure decreases
//! monotonically with index. The constructor validates shape only; it does
//! not validate monotonicity, which the ascent primitives enforce on the
//! sub-profiles they receive.

use crate::core_types::{Celsius, HectoPascals, Meters};
use crate::error::ScanError;
use serde::{Deserialize, Serialize};

/// A discretized vertical sounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sounding {
    pressure: Vec<HectoPascals>,
    height: Vec<Meters>,
    temperature: Vec<Celsius>,
    dew_point: Vec<Celsius>,
}

/// View of one sounding level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Position of the level within the sounding (0 = lowest)
    pub index: usize,
    /// Pressure at the level
    pub pressure: HectoPascals,
    /// Geopotential height at the level
    pub height: Meters,
    /// Environment temperature at the level
    pub temperature: Celsius,
    /// Environment dew point at the level
    pub dew_point: Celsius,
}

impl Sounding {
    /// Build a sounding from four co-indexed profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputShape`] when the sequences differ in length
    /// or are empty. No partial sounding is ever constructed.
    pub fn new(
        pressure: Vec<HectoPascals>,
        height: Vec<Meters>,
        temperature: Vec<Celsius>,
        dew_point: Vec<Celsius>,
    ) -> Result<Self, ScanError> {
        let n = pressure.len();
        if n == 0 || height.len() != n || temperature.len() != n || dew_point.len() != n {
            return Err(ScanError::InputShape {
                pressure: n,
                height: height.len(),
                temperature: temperature.len(),
                dew_point: dew_point.len(),
            });
        }
        Ok(Sounding {
            pressure,
            height,
            temperature,
            dew_point,
        })
    }

    /// Number of levels in the sounding (always >= 1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether the sounding has no levels. Always false for a constructed
    /// sounding; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Pressure profile, bottom-up
    #[must_use]
    pub fn pressure_profile(&self) -> &[HectoPascals] {
        &self.pressure
    }

    /// Height profile, bottom-up
    #[must_use]
    pub fn height_profile(&self) -> &[Meters] {
        &self.height
    }

    /// Environment temperature profile, bottom-up
    #[must_use]
    pub fn temperature_profile(&self) -> &[Celsius] {
        &self.temperature
    }

    /// Environment dew point profile, bottom-up
    #[must_use]
    pub fn dew_point_profile(&self) -> &[Celsius] {
        &self.dew_point
    }

    /// View of the level at `index`.
    ///
    /// Panics if `index` is out of range; callers iterate within `0..len()`.
    #[must_use]
    pub fn level(&self, index: usize) -> Level {
        Level {
            index,
            pressure: self.pressure[index],
            height: self.height[index],
            temperature: self.temperature[index],
            dew_point: self.dew_point[index],
        }
    }

    /// Iterate the levels bottom-up.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        (0..self.len()).map(move |index| self.level(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: &[f64]) -> Vec<HectoPascals> {
        values.iter().copied().map(HectoPascals::new).collect()
    }

    #[test]
    fn constructor_accepts_co_indexed_profiles() {
        let snd = Sounding::new(
            profile(&[1000.0, 900.0, 800.0]),
            vec![Meters::new(110.0), Meters::new(990.0), Meters::new(1950.0)],
            vec![Celsius::new(25.0), Celsius::new(18.0), Celsius::new(11.0)],
            vec![Celsius::new(20.0), Celsius::new(14.0), Celsius::new(5.0)],
        )
        .expect("well-shaped sounding");
        assert_eq!(snd.len(), 3);
        assert!(!snd.is_empty());

        let lvl = snd.level(1);
        assert_eq!(lvl.index, 1);
        assert_eq!(lvl.pressure, HectoPascals::new(900.0));
        assert_eq!(lvl.temperature, Celsius::new(18.0));
    }

    #[test]
    fn constructor_rejects_length_mismatch() {
        let err = Sounding::new(
            profile(&[1000.0, 900.0]),
            vec![Meters::new(110.0)],
            vec![Celsius::new(25.0), Celsius::new(18.0)],
            vec![Celsius::new(20.0), Celsius::new(14.0)],
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::InputShape { height: 1, .. }));
    }

    #[test]
    fn constructor_rejects_empty_sounding() {
        let err = Sounding::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, ScanError::InputShape { pressure: 0, .. }));
    }

    #[test]
    fn levels_iterates_bottom_up() {
        let snd = Sounding::new(
            profile(&[1000.0, 900.0]),
            vec![Meters::new(110.0), Meters::new(990.0)],
            vec![Celsius::new(25.0), Celsius::new(18.0)],
            vec![Celsius::new(20.0), Celsius::new(14.0)],
        )
        .expect("well-shaped sounding");
        let indices: Vec<usize> = snd.levels().map(|lvl| lvl.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
