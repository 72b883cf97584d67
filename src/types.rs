//! Core Estimator Types
//!
//! Wire-compatible input/output structures for the yield estimator.
//! Field names serialize in camelCase to match the dashboard client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Soil classes recognised by the estimator.
///
/// Any other string on the wire maps to `Unknown`, which carries a
/// neutral 1.0 multiplier rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Mountain,
    Desert,
    Saline,
    #[serde(other)]
    Unknown,
}

impl SoilType {
    pub fn display_text(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Laterite => "Laterite",
            SoilType::Mountain => "Mountain",
            SoilType::Desert => "Desert",
            SoilType::Saline => "Saline",
            SoilType::Unknown => "Unknown",
        }
    }
}

/// Agronomic/climate inputs for a single estimation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    /// Seasonal mean temperature (°C)
    pub temperature: f64,
    /// Seasonal rainfall (mm)
    pub rainfall: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Nitrogen index
    pub nitrogen: f64,
    /// Phosphorus index
    pub phosphorus: f64,
    /// Potassium index
    pub potassium: f64,
    /// Soil pH (0-14)
    pub ph_level: f64,
    pub soil_type: SoilType,
}

impl PredictionInput {
    /// Reject non-finite numeric fields before estimation.
    ///
    /// The estimator itself never fails on finite input; NaN/infinity
    /// would otherwise propagate silently through the factor product.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let fields: [(&'static str, f64); 7] = [
            ("temperature", self.temperature),
            ("rainfall", self.rainfall),
            ("humidity", self.humidity),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("phLevel", self.ph_level),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EstimatorError::NonFinite { field, value });
            }
        }

        Ok(())
    }
}

/// Parallel risk/recommendation lists.
///
/// Invariant: `risks.len() == recommendations.len() >= 1`. The rule
/// engine emits a favourable-conditions pair when nothing else fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Complete estimation result for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    /// Synthetic yield (tonnes/hectare), clamped to [1.5, 6.0]
    pub predicted_yield: f64,
    /// Confidence score in [85, 95]
    pub confidence: f64,
    pub risk_analysis: RiskAnalysis,
    /// RFC 3339 generation time
    pub timestamp: String,
    /// Echo of the request for client-side display
    pub inputs: PredictionInput,
}

/// Estimator input errors
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
}
