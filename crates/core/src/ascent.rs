//! Parcel ascent evaluation.
//!
//! The scanner consumes two primitives through the [`AscentEvaluator`]
//! trait: construction of a parcel ascent profile over a pressure
//! sub-sequence, and CAPE/CIN integration of that profile against the
//! environment. [`AdiabaticEvaluator`] is the provided implementation;
//! tests substitute scripted evaluators through the same seam.

use crate::core_types::{Celsius, HectoPascals, JoulesPerKilogram, Kelvin};
use crate::error::AscentError;
use crate::thermo;

/// Maximum pressure substep for the pseudoadiabatic integration, hPa
const MOIST_STEP_HPA: f64 = 1.0;

/// The two evaluation primitives required by the effective layer scan.
pub trait AscentEvaluator {
    /// Build the parcel temperature profile for a parcel lifted from the
    /// first element of `pressure` with the given origin temperature and
    /// dew point. The output is co-indexed with `pressure`.
    ///
    /// # Errors
    ///
    /// Fails on an empty or non-monotonic pressure sequence, or when the
    /// ascent physics diverges.
    fn parcel_profile(
        &self,
        pressure: &[HectoPascals],
        origin_temperature: Celsius,
        origin_dew_point: Celsius,
    ) -> Result<Vec<Celsius>, AscentError>;

    /// Integrate CAPE and CIN for a parcel temperature profile against the
    /// environment. All four sequences are co-indexed. CAPE is >= 0 and
    /// CIN <= 0 on success.
    ///
    /// # Errors
    ///
    /// Fails when the sequence lengths differ or the pressure sequence is
    /// empty or non-monotonic.
    fn cape_cin(
        &self,
        pressure: &[HectoPascals],
        temperature: &[Celsius],
        dew_point: &[Celsius],
        parcel_temperature: &[Celsius],
    ) -> Result<(JoulesPerKilogram, JoulesPerKilogram), AscentError>;
}

/// Dry-then-moist adiabatic ascent with trapezoidal CAPE/CIN integration
/// in log-pressure.
///
/// Ascent follows the dry adiabat from the origin to the lifting
/// condensation level, then integrates the pseudoadiabatic lapse rate in
/// fixed pressure substeps. Buoyancy uses virtual temperatures: the
/// environment from its dew point, the parcel treated as saturated along
/// its curve (the standard approximation when only the parcel temperature
/// profile is known). CIN accumulates below the level of free convection
/// only; without a level of free convection both integrals are zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdiabaticEvaluator;

impl AscentEvaluator for AdiabaticEvaluator {
    fn parcel_profile(
        &self,
        pressure: &[HectoPascals],
        origin_temperature: Celsius,
        origin_dew_point: Celsius,
    ) -> Result<Vec<Celsius>, AscentError> {
        if pressure.is_empty() {
            return Err(AscentError::EmptyProfile);
        }
        check_monotonic(pressure)?;

        let origin = pressure[0];
        let origin_temp = origin_temperature.to_kelvin();
        // A dew point above the temperature is treated as saturated.
        let origin_dew = origin_dew_point.min(origin_temperature).to_kelvin();

        let theta = thermo::potential_temperature(origin, origin_temp);
        let lcl_temp = thermo::lcl_temperature(origin_temp, origin_dew);
        let lcl_pres = thermo::lcl_pressure(origin, origin_temp, lcl_temp);

        let mut profile = Vec::with_capacity(pressure.len());
        let mut cursor_pres = lcl_pres;
        let mut cursor_temp = lcl_temp;
        for &level in pressure {
            if level >= lcl_pres {
                profile.push(thermo::temperature_from_theta(theta, level).to_celsius());
            } else {
                cursor_temp = moist_descend(cursor_pres, cursor_temp, level)?;
                cursor_pres = level;
                profile.push(cursor_temp.to_celsius());
            }
        }
        Ok(profile)
    }

    fn cape_cin(
        &self,
        pressure: &[HectoPascals],
        temperature: &[Celsius],
        dew_point: &[Celsius],
        parcel_temperature: &[Celsius],
    ) -> Result<(JoulesPerKilogram, JoulesPerKilogram), AscentError> {
        let n = pressure.len();
        if n == 0 {
            return Err(AscentError::EmptyProfile);
        }
        if temperature.len() != n || dew_point.len() != n || parcel_temperature.len() != n {
            return Err(AscentError::LengthMismatch {
                pressure: n,
                temperature: temperature.len(),
                dew_point: dew_point.len(),
                parcel: parcel_temperature.len(),
            });
        }
        check_monotonic(pressure)?;

        // Virtual temperature excess of the parcel over the environment, K.
        let buoyancy: Vec<f64> = pressure
            .iter()
            .zip(temperature)
            .zip(dew_point)
            .zip(parcel_temperature)
            .map(|(((&pres, &env_t), &env_td), &pcl_t)| {
                let env_ratio = thermo::mixing_ratio(pres, env_td.min(env_t));
                let env_virt = thermo::virtual_temperature(env_t.to_kelvin(), env_ratio);
                let pcl_ratio = thermo::saturation_mixing_ratio(pres, pcl_t);
                let pcl_virt = thermo::virtual_temperature(pcl_t.to_kelvin(), pcl_ratio);
                pcl_virt.value() - env_virt.value()
            })
            .collect();

        // Level of free convection: first buoyant level. No LFC, no moist
        // convection: both integrals are zero.
        let Some(lfc_index) = buoyancy.iter().position(|&excess| excess > 0.0) else {
            return Ok((JoulesPerKilogram::new(0.0), JoulesPerKilogram::new(0.0)));
        };

        let mut cape = 0.0;
        let mut cin = 0.0;
        for (index, pair) in buoyancy.windows(2).enumerate() {
            let log_depth = (pressure[index].value() / pressure[index + 1].value()).ln();
            let contribution = 0.5 * (pair[0] + pair[1]) * log_depth;
            if contribution > 0.0 {
                cape += contribution;
            } else if index < lfc_index {
                cin += contribution;
            }
        }

        Ok((
            JoulesPerKilogram::new(thermo::DRY_AIR_GAS_CONSTANT * cape),
            JoulesPerKilogram::new(thermo::DRY_AIR_GAS_CONSTANT * cin),
        ))
    }
}

/// Reject pressure sequences that do not strictly decrease.
fn check_monotonic(pressure: &[HectoPascals]) -> Result<(), AscentError> {
    if let Some(position) = pressure.windows(2).position(|pair| pair[1] >= pair[0]) {
        return Err(AscentError::NonMonotonicPressure {
            index: position + 1,
        });
    }
    Ok(())
}

/// Integrate the pseudoadiabatic lapse rate from (`from_pres`, `from_temp`)
/// down in pressure to `to_pres`, midpoint method with substeps no wider
/// than [`MOIST_STEP_HPA`].
fn moist_descend(
    from_pres: HectoPascals,
    from_temp: Kelvin,
    to_pres: HectoPascals,
) -> Result<Kelvin, AscentError> {
    let span = from_pres.value() - to_pres.value();
    let steps = (span / MOIST_STEP_HPA).ceil().max(1.0) as usize;
    let step = (to_pres.value() - from_pres.value()) / steps as f64;

    let mut pres = from_pres.value();
    let mut temp = from_temp.value();
    for _ in 0..steps {
        let slope_start =
            thermo::pseudoadiabatic_lapse_rate(HectoPascals::new(pres), Kelvin::new(temp));
        let mid_temp = temp + 0.5 * step * slope_start;
        let mid_pres = pres + 0.5 * step;
        if !mid_temp.is_finite() || mid_temp <= 0.0 {
            return Err(AscentError::Saturation {
                pressure: HectoPascals::new(mid_pres),
            });
        }
        let slope_mid =
            thermo::pseudoadiabatic_lapse_rate(HectoPascals::new(mid_pres), Kelvin::new(mid_temp));
        temp += step * slope_mid;
        pres += step;
        if !temp.is_finite() || temp <= 0.0 {
            return Err(AscentError::Saturation {
                pressure: HectoPascals::new(pres),
            });
        }
    }
    Ok(Kelvin::new(temp))
}
