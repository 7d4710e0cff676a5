//! Effective inflow layer scan.
//!
//! Surface-modifying convective storms draw inflow from a contiguous band
//! of low levels rather than the surface alone. A level belongs to that
//! band when a parcel lifted from it is convectively supportive: CAPE of
//! at least 100 J/kg and CIN above -250 J/kg (Thompson et al. 2007).
//!
//! The scan is two sequential phases over the sounding, bottom-up. Phase 1
//! finds the first supportive level (the layer bottom); phase 2 continues
//! upward and finds the first level failing the criteria (the layer top).
//! Both phases lift a fresh parcel per level through the sub-sounding above
//! it, so the scan costs one ascent and one CAPE/CIN integration per level
//! visited.
//!
//! # References
//!
//! - Thompson, R.L., Mead, C.M., & Edwards, R. (2007). "Effective
//!   storm-relative helicity and bulk shear in supercell thunderstorm
//!   environments." Weather and Forecasting, 22, 102-115.

use crate::ascent::AscentEvaluator;
use crate::core_types::{HectoPascals, JoulesPerKilogram, Meters};
use crate::error::ScanError;
use crate::sounding::{Level, Sounding};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Minimum CAPE for a level to support inflow, J/kg
pub const CAPE_FLOOR: JoulesPerKilogram = JoulesPerKilogram::new(100.0);

/// Most negative CIN a supportive level may carry, J/kg
pub const CIN_FLOOR: JoulesPerKilogram = JoulesPerKilogram::new(-250.0);

/// Whether a level supports inflow: `cape >= 100 && cin > -250`.
#[must_use]
pub fn supportive(cape: JoulesPerKilogram, cin: JoulesPerKilogram) -> bool {
    cape >= CAPE_FLOOR && cin > CIN_FLOOR
}

/// Whether a level ends the layer: `cape < 100 || cin < -250`.
///
/// Deliberately not the logical complement of [`supportive`]: at exactly
/// `cin == -250` a level neither starts a layer nor ends one. The original
/// formulation mixes strict and non-strict comparisons this way and the
/// asymmetry is preserved.
#[must_use]
pub fn unsupportive(cape: JoulesPerKilogram, cin: JoulesPerKilogram) -> bool {
    cape < CAPE_FLOOR || cin < CIN_FLOOR
}

/// Coordinate system for the returned layer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateMode {
    /// Return bounds as pressures
    Pressure,
    /// Return bounds as geopotential heights
    Height,
}

/// One discovered bound of the layer, carrying both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBound {
    /// Sounding index of the bound
    pub index: usize,
    /// Pressure at the bound
    pub pressure: HectoPascals,
    /// Geopotential height at the bound
    pub height: Meters,
}

impl From<Level> for LayerBound {
    fn from(level: Level) -> LayerBound {
        LayerBound {
            index: level.index,
            pressure: level.pressure,
            height: level.height,
        }
    }
}

/// How the layer top was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopBoundary {
    /// An unsupportive level was found inside the sounding
    Interior,
    /// The supportive condition persisted to the top of the sounding; the
    /// final level was adopted as the top
    SoundingTop,
}

/// The effective inflow layer of a sounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveLayer {
    /// First supportive level
    pub bottom: LayerBound,
    /// First unsupportive level above the bottom, or the sounding top
    pub top: LayerBound,
    /// Whether the top was detected or defaulted to the sounding top
    pub top_boundary: TopBoundary,
}

impl EffectiveLayer {
    /// The layer bounds in the requested coordinate system.
    #[must_use]
    pub fn bounds(&self, mode: CoordinateMode) -> LayerBounds {
        match mode {
            CoordinateMode::Pressure => LayerBounds::Pressure {
                bottom: self.bottom.pressure,
                top: self.top.pressure,
            },
            CoordinateMode::Height => LayerBounds::Height {
                bottom: self.bottom.height,
                top: self.top.height,
            },
        }
    }
}

/// Layer bounds in one coordinate system, selected by [`CoordinateMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayerBounds {
    /// Bounds as pressures
    Pressure {
        /// Pressure of the layer bottom
        bottom: HectoPascals,
        /// Pressure of the layer top
        top: HectoPascals,
    },
    /// Bounds as geopotential heights
    Height {
        /// Height of the layer bottom
        bottom: Meters,
        /// Height of the layer top
        top: Meters,
    },
}

/// Scan progress, advanced one evaluated level at a time.
///
/// The phase transition and both terminal conditions live here so they can
/// be exercised without an evaluator. Phase 1's result travels inside
/// `SearchingTop` as an immutable value; nothing is mutated across phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanState {
    /// Phase 1: looking for the first supportive level
    SearchingBottom,
    /// Phase 2: bottom found, looking for the first unsupportive level
    SearchingTop {
        /// The bound discovered in phase 1
        bottom: LayerBound,
    },
    /// Terminal: a complete layer was identified
    Found(EffectiveLayer),
    /// Terminal: the sounding has no supportive level
    Absent,
}

impl ScanState {
    /// Advance the scan with the CAPE/CIN evaluation of one level.
    /// Terminal states are unchanged.
    #[must_use]
    pub fn step(self, level: LayerBound, cape: JoulesPerKilogram, cin: JoulesPerKilogram) -> Self {
        match self {
            ScanState::SearchingBottom => {
                if supportive(cape, cin) {
                    ScanState::SearchingTop { bottom: level }
                } else {
                    self
                }
            }
            ScanState::SearchingTop { bottom } => {
                if unsupportive(cape, cin) {
                    ScanState::Found(EffectiveLayer {
                        bottom,
                        top: level,
                        top_boundary: TopBoundary::Interior,
                    })
                } else {
                    self
                }
            }
            ScanState::Found(_) | ScanState::Absent => self,
        }
    }

    /// Resolve the scan once the sounding is exhausted. A bottom without a
    /// detected top adopts the final level as the top (`SoundingTop`); no
    /// bottom means the layer is absent.
    #[must_use]
    pub fn finalize(self, top_of_sounding: LayerBound) -> Self {
        match self {
            ScanState::SearchingBottom => ScanState::Absent,
            ScanState::SearchingTop { bottom } => ScanState::Found(EffectiveLayer {
                bottom,
                top: top_of_sounding,
                top_boundary: TopBoundary::SoundingTop,
            }),
            ScanState::Found(_) | ScanState::Absent => self,
        }
    }
}

/// Scan a sounding for its effective inflow layer, returning the full
/// index-bearing result.
///
/// Returns `Ok(None)` when no level is supportive. Levels above a detected
/// top are never evaluated.
///
/// # Errors
///
/// Propagates evaluator failures as [`ScanError::Evaluation`] with the
/// index of the offending level; the scan performs no retries and no
/// partial-result recovery.
pub fn effective_inflow_scan<E: AscentEvaluator>(
    sounding: &Sounding,
    evaluator: &E,
) -> Result<Option<EffectiveLayer>, ScanError> {
    let pressure = sounding.pressure_profile();
    let temperature = sounding.temperature_profile();
    let dew_point = sounding.dew_point_profile();

    let mut state = ScanState::SearchingBottom;
    for index in 0..sounding.len() {
        let sub_pressure = &pressure[index..];
        let parcel = evaluator
            .parcel_profile(sub_pressure, temperature[index], dew_point[index])
            .map_err(|source| ScanError::Evaluation { index, source })?;
        let (cape, cin) = evaluator
            .cape_cin(
                sub_pressure,
                &temperature[index..],
                &dew_point[index..],
                &parcel,
            )
            .map_err(|source| ScanError::Evaluation { index, source })?;
        trace!(index, %cape, %cin, "level evaluated");

        let previous = state;
        state = state.step(sounding.level(index).into(), cape, cin);
        match (previous, state) {
            (ScanState::SearchingBottom, ScanState::SearchingTop { bottom }) => {
                debug!(index = bottom.index, pressure = %bottom.pressure, "inflow layer bottom located");
            }
            (ScanState::SearchingTop { .. }, ScanState::Found(layer)) => {
                debug!(index = layer.top.index, pressure = %layer.top.pressure, "inflow layer top located");
            }
            _ => {}
        }
        if matches!(state, ScanState::Found(_)) {
            break;
        }
    }

    let top_of_sounding = sounding.level(sounding.len() - 1).into();
    match state.finalize(top_of_sounding) {
        ScanState::Found(layer) => Ok(Some(layer)),
        _ => Ok(None),
    }
}

/// Scan a sounding for its effective inflow layer, returning the bounds in
/// the requested coordinate system.
///
/// # Errors
///
/// Same failure surface as [`effective_inflow_scan`].
pub fn effective_inflow_layer<E: AscentEvaluator>(
    sounding: &Sounding,
    evaluator: &E,
    mode: CoordinateMode,
) -> Result<Option<LayerBounds>, ScanError> {
    Ok(effective_inflow_scan(sounding, evaluator)?.map(|layer| layer.bounds(mode)))
}
