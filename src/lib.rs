//! Rice Yield Estimator
//!
//! Synthetic rice-yield estimation for Tamil Nadu districts:
//! - `factors`: per-input multipliers (optimum/sensitivity/floor)
//! - `estimator`: baseline x factor product, jitter, clamp, confidence
//! - `risk`: rule-based risk/recommendation derivation
//! - `data`: embedded district/soil/variety reference tables
//! - `climate`: synthetic historical series and climate insights
//! - `adapter`: dashboard request shape -> estimator input
//!
//! The optional `api` feature adds an axum JSON server over the above.

pub mod adapter;
pub mod api_server;
pub mod climate;
pub mod data;
pub mod estimator;
pub mod factors;
pub mod risk;
pub mod types;

// Re-export commonly used types
pub use estimator::{estimate, estimate_with, FixedVariation, ThreadRngVariation, VariationSource};
pub use risk::derive_risk_analysis;
pub use types::{EstimatorError, PredictionInput, PredictionOutput, RiskAnalysis, SoilType};

#[cfg(feature = "api")]
pub use api_server::create_router;
