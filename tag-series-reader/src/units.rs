//! Unit conversion table
//!
//! Tag files carry values in whatever unit the historian exported; a tag's
//! unit instruction selects the affine rule that maps them into the base
//! unit system the downstream aligner works in. The table is process-wide
//! calibration data, built once and shared read-only by every conversion.
//!
//! Unknown instructions (including the empty string) are not errors: the
//! value passes through unchanged.

use crate::types::ConversionRule;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Celsius to Kelvin offset
pub const KELVIN_OFFSET: f64 = 273.15;

/// Standard atmospheric pressure, Pa
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Technical atmosphere (1 kgf/cm2), Pa
pub const TECHNICAL_ATMOSPHERE: f64 = 98_066.5;

/// Unit-instruction table: instruction string -> affine rule.
///
/// Rules are applied as `value / scale - offset`. The numeric factors are
/// calibration data for the historian exports this reader consumes.
static UNIT_TABLE: LazyLock<HashMap<&'static str, ConversionRule>> = LazyLock::new(|| {
    let rule = |scale: f64, offset: f64| ConversionRule { scale, offset };
    HashMap::from([
        ("m3/s", rule(1.0, 0.0)),
        // 3600 m3/h = 1 m3/s
        ("m3/h-m3/s", rule(3600.0, 0.0)),
        ("m3/h", rule(3600.0, 0.0)),
        ("C", rule(1.0, -KELVIN_OFFSET)),
        ("K", rule(1.0, 0.0)),
        (
            "kgf/cm2(e)",
            rule(
                1.0 / TECHNICAL_ATMOSPHERE,
                -ATMOSPHERIC_PRESSURE / TECHNICAL_ATMOSPHERE,
            ),
        ),
        (
            "kgf/cm2",
            rule(
                1.0 / TECHNICAL_ATMOSPHERE,
                -ATMOSPHERIC_PRESSURE / TECHNICAL_ATMOSPHERE,
            ),
        ),
        ("kgf/cm2(a)", rule(1.0 / TECHNICAL_ATMOSPHERE, 0.0)),
        ("MPa", rule(1e-6, 0.0)),
        ("MPa-kPa", rule(1e3, 0.0)),
        ("mm^2/s-m^2/s", rule(1e-6, 0.0)),
        ("mm^2/s", rule(1e6, 0.0)),
    ])
});

/// Convert `value` according to the rule selected by `unit_instruction`.
///
/// Instructions not present in the table pass the value through unchanged.
pub fn convert(value: f64, unit_instruction: &str) -> f64 {
    match UNIT_TABLE.get(unit_instruction) {
        Some(rule) => rule.apply(value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_instruction() {
        assert_eq!(convert(42.5, "m3/s"), 42.5);
        assert_eq!(convert(-3.0, "K"), -3.0);
    }

    #[test]
    fn test_flow_conversion() {
        assert_eq!(convert(3600.0, "m3/h-m3/s"), 1.0);
        assert_eq!(convert(3600.0, "m3/h"), 1.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert(0.0, "C"), KELVIN_OFFSET);
        assert!((convert(20.0, "C") - 293.15).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_pressure() {
        // zero gauge reading shifts by the calibrated atmospheric term
        let atm_term = ATMOSPHERIC_PRESSURE / TECHNICAL_ATMOSPHERE;
        assert_eq!(convert(0.0, "kgf/cm2(e)"), atm_term);
        assert_eq!(convert(0.0, "kgf/cm2"), atm_term);
        // 1 kgf/cm2 absolute = one technical atmosphere in Pa
        assert!((convert(1.0, "kgf/cm2(a)") - TECHNICAL_ATMOSPHERE).abs() < 1e-6);
    }

    #[test]
    fn test_pressure_scaling() {
        assert!((convert(1.0, "MPa") - 1e6).abs() < 1e-6);
        assert_eq!(convert(1000.0, "MPa-kPa"), 1.0);
    }

    #[test]
    fn test_viscosity_scaling() {
        assert_eq!(convert(1.0, "mm^2/s"), 1e-6);
        assert_eq!(convert(1e-6, "mm^2/s-m^2/s"), 1.0);
    }

    #[test]
    fn test_unknown_instruction_passes_through() {
        assert_eq!(convert(5.0, "not-a-real-unit"), 5.0);
        assert_eq!(convert(5.0, ""), 5.0);
        assert_eq!(convert(5.0, "kg/m3"), 5.0);
    }
}
