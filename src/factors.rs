//! Per-Factor Yield Multipliers
//!
//! Each climate/soil input contributes an independent dimensionless
//! multiplier applied to the baseline yield. Deviation factors penalise
//! distance from an agronomic optimum down to a floor; nutrient factors
//! scale linearly with the raw index (no optimum, no floor). The final
//! yield is the *product* of all factors, so a single severely
//! unfavourable input dominates the result.

use crate::types::SoilType;

/// Optimum / sensitivity / floor for one deviation factor
#[derive(Debug, Clone, Copy)]
pub struct DeviationParams {
    pub optimal: f64,
    pub sensitivity: f64,
    pub floor: f64,
}

// Set points from Tamil Nadu rice agronomy ranges
pub const TEMPERATURE: DeviationParams = DeviationParams { optimal: 28.0, sensitivity: 0.02, floor: 0.7 };
pub const RAINFALL: DeviationParams = DeviationParams { optimal: 1200.0, sensitivity: 0.0003, floor: 0.6 };
pub const HUMIDITY: DeviationParams = DeviationParams { optimal: 75.0, sensitivity: 0.01, floor: 0.8 };
pub const PH_LEVEL: DeviationParams = DeviationParams { optimal: 6.5, sensitivity: 0.2, floor: 0.5 };

// Linear nutrient coefficients
pub const NITROGEN_COEF: f64 = 0.1;
pub const PHOSPHORUS_COEF: f64 = 0.08;
pub const POTASSIUM_COEF: f64 = 0.07;

/// `max(floor, 1 - |value - optimal| * sensitivity)`
pub fn deviation_factor(value: f64, params: DeviationParams) -> f64 {
    (1.0 - (value - params.optimal).abs() * params.sensitivity).max(params.floor)
}

/// Fixed multiplier per soil class; `Unknown` is neutral.
pub fn soil_multiplier(soil: SoilType) -> f64 {
    match soil {
        SoilType::Alluvial => 1.2,
        SoilType::Black => 1.1,
        SoilType::Red => 1.0,
        SoilType::Laterite => 0.9,
        SoilType::Mountain => 0.8,
        SoilType::Desert => 0.6,
        SoilType::Saline => 0.7,
        SoilType::Unknown => 1.0,
    }
}
