// ABOUTME: Unit converter mapping a value and its unit to the paired unit
// ABOUTME: Supports kg <-> lbs and cm <-> inches, rounded to two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::str::FromStr;

use fittrack_core::constants::units::{CM_PER_INCH, LBS_PER_KG};
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::metrics::round2;

/// Units accepted by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lbs,
    /// Centimeters
    Cm,
    /// Inches
    Inches,
}

impl FromStr for MeasurementUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "lbs" => Ok(Self::Lbs),
            "cm" => Ok(Self::Cm),
            "inches" => Ok(Self::Inches),
            other => Err(AppError::invalid_unit(other)),
        }
    }
}

/// Converted value, keyed by the unit it is expressed in
///
/// Serializes as a single-key object such as `{"value_in_lbs": 154.32}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Conversion {
    /// Value expressed in pounds
    #[serde(rename = "value_in_lbs")]
    Pounds(f64),
    /// Value expressed in kilograms
    #[serde(rename = "value_in_kg")]
    Kilograms(f64),
    /// Value expressed in inches
    #[serde(rename = "value_in_inches")]
    Inches(f64),
    /// Value expressed in centimeters
    #[serde(rename = "value_in_cm")]
    Centimeters(f64),
}

impl Conversion {
    /// The converted number regardless of unit
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Pounds(v) | Self::Kilograms(v) | Self::Inches(v) | Self::Centimeters(v) => v,
        }
    }
}

impl MeasurementUnit {
    /// Convert `value` from this unit into its counterpart
    #[must_use]
    pub fn convert(self, value: f64) -> Conversion {
        match self {
            Self::Kg => Conversion::Pounds(round2(value * LBS_PER_KG)),
            Self::Lbs => Conversion::Kilograms(round2(value / LBS_PER_KG)),
            Self::Cm => Conversion::Inches(round2(value / CM_PER_INCH)),
            Self::Inches => Conversion::Centimeters(round2(value * CM_PER_INCH)),
        }
    }
}

/// Parse `unit` and convert `value`
///
/// # Errors
///
/// `InvalidUnit` for an unrecognized unit string, `InvalidInput` for a
/// non-finite value.
pub fn convert(value: f64, unit: &str) -> AppResult<Conversion> {
    let unit = unit.parse::<MeasurementUnit>()?;
    if !value.is_finite() {
        return Err(AppError::invalid_input("value must be a finite number"));
    }
    Ok(unit.convert(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittrack_core::errors::ErrorCode;

    #[test]
    fn test_kg_to_lbs() {
        assert_eq!(convert(70.0, "kg").unwrap(), Conversion::Pounds(154.32));
    }

    #[test]
    fn test_lbs_to_kg() {
        assert_eq!(convert(154.32, "lbs").unwrap(), Conversion::Kilograms(70.0));
    }

    #[test]
    fn test_length_conversions() {
        assert_eq!(convert(180.0, "cm").unwrap(), Conversion::Inches(70.87));
        assert_eq!(convert(12.0, "inches").unwrap(), Conversion::Centimeters(30.48));
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for v in [0.5, 1.0, 55.5, 70.0, 83.27, 120.0, 250.75] {
            let lbs = convert(v, "kg").unwrap().value();
            let back = convert(lbs, "lbs").unwrap().value();
            assert!((back - v).abs() <= 0.01, "{v} round-tripped to {back}");
        }
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = convert(10.0, "stone").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUnit);
    }

    #[test]
    fn test_units_are_case_sensitive() {
        assert!(convert(10.0, "KG").is_err());
    }

    #[test]
    fn test_serializes_under_unit_key() {
        let json = serde_json::to_value(Conversion::Pounds(154.32)).unwrap();
        assert_eq!(json, serde_json::json!({ "value_in_lbs": 154.32 }));
    }
}
