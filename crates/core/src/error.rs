//! Error types for the effective inflow layer scan.
//!
//! Two layers of failure exist: the ascent primitives can reject a malformed
//! sub-profile (`AscentError`), and the scan itself can reject a malformed
//! sounding or surface a primitive failure with the offending level index
//! (`ScanError`). An absent layer is not an error; it is the `Ok(None)` arm
//! of the scan result.

use crate::core_types::HectoPascals;

/// Errors from the parcel ascent and CAPE/CIN primitives
#[derive(Debug, Clone, PartialEq)]
pub enum AscentError {
    /// The pressure profile handed to the primitive was empty
    EmptyProfile,
    /// Pressure did not strictly decrease at this position in the profile
    NonMonotonicPressure {
        /// Index of the first level that fails to decrease
        index: usize,
    },
    /// The co-indexed input sequences have different lengths
    LengthMismatch {
        /// Length of the pressure sequence
        pressure: usize,
        /// Length of the environment temperature sequence
        temperature: usize,
        /// Length of the environment dew point sequence
        dew_point: usize,
        /// Length of the parcel temperature sequence
        parcel: usize,
    },
    /// Moist-adiabatic integration produced a non-physical temperature
    Saturation {
        /// Pressure level at which the integration failed
        pressure: HectoPascals,
    },
}

impl std::fmt::Display for AscentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AscentError::EmptyProfile => write!(f, "empty pressure profile"),
            AscentError::NonMonotonicPressure { index } => {
                write!(f, "pressure does not strictly decrease at index {index}")
            }
            AscentError::LengthMismatch {
                pressure,
                temperature,
                dew_point,
                parcel,
            } => write!(
                f,
                "co-indexed sequences differ in length: \
                 pressure {pressure}, temperature {temperature}, \
                 dew point {dew_point}, parcel {parcel}"
            ),
            AscentError::Saturation { pressure } => {
                write!(f, "moist ascent diverged at {pressure}")
            }
        }
    }
}

impl std::error::Error for AscentError {}

/// Errors from the effective inflow layer scan
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The four sounding sequences are not co-indexed, or the sounding is empty
    InputShape {
        /// Length of the pressure sequence
        pressure: usize,
        /// Length of the height sequence
        height: usize,
        /// Length of the temperature sequence
        temperature: usize,
        /// Length of the dew point sequence
        dew_point: usize,
    },
    /// An ascent primitive failed while evaluating a level
    Evaluation {
        /// Index of the level whose evaluation failed
        index: usize,
        /// The underlying primitive failure
        source: AscentError,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::InputShape {
                pressure,
                height,
                temperature,
                dew_point,
            } => {
                if *pressure == 0 && *height == 0 && *temperature == 0 && *dew_point == 0 {
                    write!(f, "empty sounding")
                } else {
                    write!(
                        f,
                        "sounding sequences are not co-indexed: \
                         pressure {pressure}, height {height}, \
                         temperature {temperature}, dew point {dew_point}"
                    )
                }
            }
            ScanError::Evaluation { index, source } => {
                write!(f, "evaluation failed at level {index}: {source}")
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::InputShape { .. } => None,
            ScanError::Evaluation { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_error_carries_index_and_source() {
        let err = ScanError::Evaluation {
            index: 7,
            source: AscentError::EmptyProfile,
        };
        let text = err.to_string();
        assert!(text.contains("level 7"), "message should name the level: {text}");
        assert!(
            std::error::Error::source(&err).is_some(),
            "evaluation errors should expose the primitive failure"
        );
    }

    #[test]
    fn empty_sounding_has_distinct_message() {
        let err = ScanError::InputShape {
            pressure: 0,
            height: 0,
            temperature: 0,
            dew_point: 0,
        };
        assert_eq!(err.to_string(), "empty sounding");
    }
}
