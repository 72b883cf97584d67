//! Dashboard Request Adapter
//!
//! The dashboard client submits district/season/year plus raw weather
//! readings and two 0-100 sliders (water availability, fertilizer
//! application). The estimator wants NPK indices, pH and a soil class,
//! so this adapter performs the mapping:
//!
//! - fertilizer slider -> NPK indices via fixed linear coefficients
//!   (a 75% application rate lands on the N=30/P=22.5/K=18.75 band,
//!   comparable to typical recommended dosage indices);
//! - soil class from the district's typical soil;
//! - pH defaults to the 6.5 optimum (the dashboard has no pH probe);
//! - water availability does not feed the yield factors (it only
//!   drove a display-side suitability score upstream) and is echoed
//!   through untouched.

use serde::{Deserialize, Serialize};

use crate::data::typical_soil;
use crate::types::PredictionInput;

const FERTILIZER_TO_NITROGEN: f64 = 0.4;
const FERTILIZER_TO_PHOSPHORUS: f64 = 0.3;
const FERTILIZER_TO_POTASSIUM: f64 = 0.25;
const DEFAULT_PH: f64 = 6.5;

/// Request body as sent by the dashboard form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub district: String,
    /// "kuruvai", "samba" or "thaladi"
    pub season: String,
    pub year: i32,
    pub temperature: f64,
    pub rainfall: f64,
    pub humidity: f64,
    /// Water availability / irrigation coverage (0-100)
    pub water: f64,
    /// Fertilizer application rate (0-100 slider)
    pub fertilizer: f64,
}

impl DashboardRequest {
    /// Map dashboard fields onto the estimator's input shape.
    pub fn to_prediction_input(&self) -> PredictionInput {
        PredictionInput {
            temperature: self.temperature,
            rainfall: self.rainfall,
            humidity: self.humidity,
            nitrogen: self.fertilizer * FERTILIZER_TO_NITROGEN,
            phosphorus: self.fertilizer * FERTILIZER_TO_PHOSPHORUS,
            potassium: self.fertilizer * FERTILIZER_TO_POTASSIUM,
            ph_level: DEFAULT_PH,
            soil_type: typical_soil(&self.district),
        }
    }
}
