//! Rule-Based Risk Analysis
//!
//! Each rule is evaluated independently and appends at most one risk
//! string plus its matching recommendation, so the two lists stay
//! parallel. A favourable-conditions pair is emitted when no rule
//! fires.

use crate::types::{PredictionInput, RiskAnalysis};

// Thresholds for rice cultivation in Tamil Nadu
const TEMPERATURE_MIN: f64 = 20.0;
const TEMPERATURE_MAX: f64 = 35.0;
const RAINFALL_DROUGHT: f64 = 800.0;
const RAINFALL_WATERLOGGING: f64 = 1500.0;
const NITROGEN_DEFICIENT: f64 = 20.0;
const PH_MIN: f64 = 5.5;
const PH_MAX: f64 = 7.5;
const YIELD_BELOW_AVERAGE: f64 = 2.5;

/// Derive risks and recommendations from the inputs and the final
/// (clamped) yield value.
pub fn derive_risk_analysis(yield_value: f64, input: &PredictionInput) -> RiskAnalysis {
    let mut risks = Vec::new();
    let mut recommendations = Vec::new();

    if input.temperature < TEMPERATURE_MIN || input.temperature > TEMPERATURE_MAX {
        risks.push("Temperature stress may affect grain filling".to_string());
        recommendations
            .push("Consider adjusting planting schedule for optimal temperature".to_string());
    }

    // Drought and waterlogging are mutually exclusive by construction
    if input.rainfall < RAINFALL_DROUGHT {
        risks.push("Low rainfall may require supplemental irrigation".to_string());
        recommendations
            .push("Implement water conservation techniques and prepare for irrigation".to_string());
    } else if input.rainfall > RAINFALL_WATERLOGGING {
        risks.push("Excessive rainfall may cause waterlogging".to_string());
        recommendations
            .push("Ensure proper drainage and consider flood-resistant varieties".to_string());
    }

    if input.nitrogen < NITROGEN_DEFICIENT {
        risks.push("Nitrogen deficiency detected".to_string());
        recommendations.push("Apply nitrogen-rich fertilizers in split doses".to_string());
    }

    if input.ph_level < PH_MIN || input.ph_level > PH_MAX {
        risks.push("Soil pH is suboptimal for rice cultivation".to_string());
        recommendations.push(
            if input.ph_level < PH_MIN {
                "Apply lime to raise pH"
            } else {
                "Apply sulfur to lower pH"
            }
            .to_string(),
        );
    }

    if yield_value < YIELD_BELOW_AVERAGE {
        risks.push("Predicted yield is below regional average".to_string());
        recommendations
            .push("Consider soil amendments and improved cultivation practices".to_string());
    }

    if risks.is_empty() {
        risks.push("Low risk - Conditions appear favorable".to_string());
        recommendations.push("Continue current practices and monitor weather patterns".to_string());
    }

    RiskAnalysis { risks, recommendations }
}
