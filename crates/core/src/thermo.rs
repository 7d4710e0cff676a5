//! Scalar moist thermodynamics for parcel ascent.
//!
//! The helpers the adiabatic evaluator is built from: potential temperature,
//! Bolton saturation vapor pressure, mixing ratios, the lifting condensation
//! level, the pseudoadiabatic lapse rate, and virtual temperature. Each is a
//! pure function of unit-typed inputs.
//!
//! # References
//!
//! - Bolton, D. (1980). "The computation of equivalent potential temperature."
//!   Monthly Weather Review, 108, 1046-1053.
//! - Bakhshaii, A. & Stull, R. (2013). "Saturated pseudoadiabats."
//!   Weather and Forecasting, 28, 1148-1167.

use crate::core_types::{Celsius, HectoPascals, Kelvin};

/// Specific gas constant of dry air, J/(kg·K)
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.04;

/// Specific heat of dry air at constant pressure, J/(kg·K)
pub const DRY_AIR_SPECIFIC_HEAT: f64 = 1005.0;

/// Poisson constant, Rd/Cp
pub const KAPPA: f64 = DRY_AIR_GAS_CONSTANT / DRY_AIR_SPECIFIC_HEAT;

/// Ratio of the gas constants of dry air and water vapor, Rd/Rv
pub const EPSILON: f64 = 0.622;

/// Latent heat of vaporization of water near 0°C, J/kg
pub const LATENT_HEAT_VAPORIZATION: f64 = 2.501e6;

/// Reference pressure for potential temperature
pub const REFERENCE_PRESSURE: HectoPascals = HectoPascals::new(1000.0);

/// Potential temperature: `theta = T * (1000 / p)^kappa`.
#[must_use]
pub fn potential_temperature(pressure: HectoPascals, temperature: Kelvin) -> Kelvin {
    Kelvin::new(
        temperature.value() * (REFERENCE_PRESSURE.value() / pressure.value()).powf(KAPPA),
    )
}

/// Invert potential temperature to the dry-adiabat temperature at `pressure`.
#[must_use]
pub fn temperature_from_theta(theta: Kelvin, pressure: HectoPascals) -> Kelvin {
    Kelvin::new(theta.value() * (pressure.value() / REFERENCE_PRESSURE.value()).powf(KAPPA))
}

/// Saturation vapor pressure over liquid water (Bolton 1980, eq. 10):
/// `es = 6.112 * exp(17.67 * t / (t + 243.5))` with `t` in °C.
///
/// Accurate to 0.3% for -35°C <= t <= 35°C.
#[must_use]
pub fn saturation_vapor_pressure(temperature: Celsius) -> HectoPascals {
    let t = temperature.value();
    HectoPascals::new(6.112 * (17.67 * t / (t + 243.5)).exp())
}

/// Saturation mixing ratio (kg/kg) at a pressure and temperature.
///
/// Valid while the vapor pressure stays well below the total pressure,
/// which holds throughout the troposphere.
#[must_use]
pub fn saturation_mixing_ratio(pressure: HectoPascals, temperature: Celsius) -> f64 {
    let vapor = saturation_vapor_pressure(temperature);
    EPSILON * vapor.value() / (pressure.value() - vapor.value())
}

/// Actual mixing ratio (kg/kg) from the dew point.
#[must_use]
pub fn mixing_ratio(pressure: HectoPascals, dew_point: Celsius) -> f64 {
    saturation_mixing_ratio(pressure, dew_point)
}

/// Dew point from pressure and mixing ratio (kg/kg), inverting Bolton eq. 10.
#[must_use]
pub fn dew_point_from_mixing_ratio(pressure: HectoPascals, ratio: f64) -> Celsius {
    let vapor = pressure.value() * ratio / (EPSILON + ratio);
    let log_term = (vapor / 6.112).ln();
    Celsius::new(243.5 * log_term / (17.67 - log_term))
}

/// Virtual temperature of moist air with mixing ratio `ratio` (kg/kg):
/// `Tv = T * (1 + r / epsilon) / (1 + r)`.
#[must_use]
pub fn virtual_temperature(temperature: Kelvin, ratio: f64) -> Kelvin {
    Kelvin::new(temperature.value() * (1.0 + ratio / EPSILON) / (1.0 + ratio))
}

/// Temperature at the lifting condensation level (Bolton 1980, eq. 15).
#[must_use]
pub fn lcl_temperature(temperature: Kelvin, dew_point: Kelvin) -> Kelvin {
    let temp = temperature.value();
    let dew = dew_point.value();
    Kelvin::new(1.0 / (1.0 / (dew - 56.0) + (temp / dew).ln() / 800.0) + 56.0)
}

/// Pressure at the lifting condensation level, following the dry adiabat
/// from the origin level: `p_lcl = p0 * (T_lcl / T0)^(1 / kappa)`.
#[must_use]
pub fn lcl_pressure(
    origin_pressure: HectoPascals,
    origin_temperature: Kelvin,
    lcl_temp: Kelvin,
) -> HectoPascals {
    HectoPascals::new(
        origin_pressure.value() * (lcl_temp.value() / origin_temperature.value()).powf(1.0 / KAPPA),
    )
}

/// Pseudoadiabatic (saturated) lapse rate, in K per hPa of descent in
/// pressure:
///
/// ```text
/// dT/dp = (1 / p) * (Rd * T + Lv * rs)
///         / (Cp + Lv^2 * rs * epsilon / (Rd * T^2))
/// ```
#[must_use]
pub fn pseudoadiabatic_lapse_rate(pressure: HectoPascals, temperature: Kelvin) -> f64 {
    let temp = temperature.value();
    let sat_ratio = saturation_mixing_ratio(pressure, temperature.to_celsius());
    let numerator = DRY_AIR_GAS_CONSTANT * temp + LATENT_HEAT_VAPORIZATION * sat_ratio;
    let denominator = DRY_AIR_SPECIFIC_HEAT
        + LATENT_HEAT_VAPORIZATION * LATENT_HEAT_VAPORIZATION * sat_ratio * EPSILON
            / (DRY_AIR_GAS_CONSTANT * temp * temp);
    numerator / denominator / pressure.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn theta_round_trip() {
        let pressure = HectoPascals::new(850.0);
        let temperature = Kelvin::new(290.0);
        let theta = potential_temperature(pressure, temperature);
        assert!(theta > temperature, "theta exceeds T below 1000 hPa");
        let back = temperature_from_theta(theta, pressure);
        assert_relative_eq!(back.value(), temperature.value(), max_relative = 1e-12);
    }

    #[test]
    fn bolton_vapor_pressure_at_freezing() {
        let vapor = saturation_vapor_pressure(Celsius::new(0.0));
        assert_relative_eq!(vapor.value(), 6.112, max_relative = 1e-9);
    }

    /// Smithsonian tables give rs ~= 14.9 g/kg at 1000 hPa and 20°C.
    #[test]
    fn saturation_mixing_ratio_reference_value() {
        let ratio = saturation_mixing_ratio(HectoPascals::new(1000.0), Celsius::new(20.0));
        assert!(
            relative_eq!(ratio, 0.0149, max_relative = 0.02),
            "rs at 1000 hPa / 20°C should be near 14.9 g/kg, got {ratio}"
        );
    }

    #[test]
    fn dew_point_inverts_mixing_ratio() {
        let pressure = HectoPascals::new(950.0);
        let dew = Celsius::new(12.0);
        let ratio = mixing_ratio(pressure, dew);
        let back = dew_point_from_mixing_ratio(pressure, ratio);
        assert_relative_eq!(back.value(), dew.value(), epsilon = 1e-6);
    }

    #[test]
    fn lcl_sits_above_origin_for_unsaturated_parcel() {
        let origin_pressure = HectoPascals::new(1000.0);
        let temperature = Kelvin::new(300.15); // 27°C
        let dew_point = Kelvin::new(292.15); // 19°C
        let lcl_temp = lcl_temperature(temperature, dew_point);
        let lcl_pres = lcl_pressure(origin_pressure, temperature, lcl_temp);

        assert!(lcl_temp < temperature, "LCL is cooler than the origin");
        assert!(lcl_temp > dew_point, "LCL is warmer than the origin dew point");
        assert!(
            lcl_pres < origin_pressure,
            "LCL is above the origin: {lcl_pres} vs {origin_pressure}"
        );
        // Bolton's formula puts this LCL near 900 hPa.
        assert!(
            (*lcl_pres - 900.0).abs() < 20.0,
            "LCL pressure should be near 900 hPa, got {lcl_pres}"
        );
    }

    #[test]
    fn moist_lapse_is_slower_than_dry() {
        let pressure = HectoPascals::new(850.0);
        let temperature = Kelvin::new(288.0);
        let moist = pseudoadiabatic_lapse_rate(pressure, temperature);
        let dry = DRY_AIR_GAS_CONSTANT * temperature.value()
            / DRY_AIR_SPECIFIC_HEAT
            / pressure.value();
        assert!(moist > 0.0, "temperature falls with pressure on ascent");
        assert!(
            moist < dry,
            "condensation heating slows the moist lapse: moist {moist}, dry {dry}"
        );
    }

    #[test]
    fn virtual_temperature_exceeds_dry_bulb() {
        let temperature = Kelvin::new(290.0);
        let virt = virtual_temperature(temperature, 0.010);
        assert!(virt > temperature);
        assert!(virt.value() - temperature.value() < 3.0, "moisture correction is small");
    }
}
