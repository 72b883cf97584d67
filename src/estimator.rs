//! Yield Estimation Pipeline
//!
//! Multiplies a fixed baseline by the per-factor multipliers, the soil
//! multiplier and a ±10% jitter, then clamps to the realistic Tamil
//! Nadu range. Randomness is isolated behind [`VariationSource`] so
//! tests can pin it and assert exact outputs.

use chrono::Utc;
use rand::Rng;

use crate::factors::{
    self, deviation_factor, soil_multiplier, HUMIDITY, PH_LEVEL, RAINFALL, TEMPERATURE,
};
use crate::risk::derive_risk_analysis;
use crate::types::{EstimatorError, PredictionInput, PredictionOutput};

/// Average rice yield (t/ha) for Tamil Nadu, the starting point of the
/// factor product.
pub const BASELINE_YIELD: f64 = 3.5;

/// Clamp bounds for the final yield (t/ha)
pub const YIELD_MIN: f64 = 1.5;
pub const YIELD_MAX: f64 = 6.0;

/// Confidence score bounds
pub const CONFIDENCE_MIN: f64 = 85.0;
pub const CONFIDENCE_MAX: f64 = 95.0;

/// Source of the two random draws made per estimation.
///
/// Production uses [`ThreadRngVariation`]; tests pin the draws with
/// [`FixedVariation`] to make outputs exactly reproducible.
pub trait VariationSource {
    /// Yield jitter factor in [0.9, 1.1]
    fn yield_jitter(&mut self) -> f64;

    /// Confidence score in [85, 95]
    fn confidence(&mut self) -> f64;
}

/// Draws from `rand::thread_rng` per call
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngVariation;

impl VariationSource for ThreadRngVariation {
    fn yield_jitter(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.9..=1.1)
    }

    fn confidence(&mut self) -> f64 {
        rand::thread_rng().gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX)
    }
}

/// Pinned draws for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedVariation {
    pub jitter: f64,
    pub confidence: f64,
}

impl VariationSource for FixedVariation {
    fn yield_jitter(&mut self) -> f64 {
        self.jitter
    }

    fn confidence(&mut self) -> f64 {
        self.confidence
    }
}

/// Estimate yield with the default thread-rng variation source.
pub fn estimate(input: &PredictionInput) -> Result<PredictionOutput, EstimatorError> {
    estimate_with(input, &mut ThreadRngVariation)
}

/// Estimate yield with an explicit variation source.
///
/// Fails only on non-finite input; every finite input produces a
/// clamped result.
pub fn estimate_with(
    input: &PredictionInput,
    variation: &mut impl VariationSource,
) -> Result<PredictionOutput, EstimatorError> {
    input.validate()?;

    let yield_value = raw_yield(input) * variation.yield_jitter();
    let predicted_yield = round_to(yield_value.clamp(YIELD_MIN, YIELD_MAX), 2);

    // Confidence is drawn independently of the factor product
    let confidence = round_to(variation.confidence(), 1);

    let risk_analysis = derive_risk_analysis(predicted_yield, input);

    Ok(PredictionOutput {
        predicted_yield,
        confidence,
        risk_analysis,
        timestamp: Utc::now().to_rfc3339(),
        inputs: input.clone(),
    })
}

/// Factor product before jitter and clamping
pub fn raw_yield(input: &PredictionInput) -> f64 {
    BASELINE_YIELD
        * deviation_factor(input.temperature, TEMPERATURE)
        * deviation_factor(input.rainfall, RAINFALL)
        * deviation_factor(input.humidity, HUMIDITY)
        * deviation_factor(input.ph_level, PH_LEVEL)
        * (input.nitrogen * factors::NITROGEN_COEF)
        * (input.phosphorus * factors::PHOSPHORUS_COEF)
        * (input.potassium * factors::POTASSIUM_COEF)
        * soil_multiplier(input.soil_type)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
