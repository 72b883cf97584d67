//! Synthetic Historical & Climate Data
//!
//! Generates per-district historical yield series and climate insight
//! summaries around the embedded baselines. Like the estimator jitter,
//! generation takes an explicit `Rng` so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::avg_yield_for_year;

/// One year of the synthetic historical series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub year: String,
    #[serde(rename = "yield")]
    pub yield_t_ha: f64,
    pub rainfall: u32,
    pub temperature: f64,
}

/// Climate summary for one district
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateInsights {
    pub district: String,
    pub avg_temperature: f64,
    pub total_rainfall: u32,
    pub humidity: u32,
    pub growing_season: String,
    pub optimal_planting: String,
    pub soil_recommendations: Vec<String>,
}

/// Historical yield series ending at `current_year`, oldest first.
///
/// Yields vary ±20% around the recorded year baseline; rainfall and
/// temperature are drawn from typical Tamil Nadu ranges.
pub fn historical_series(
    current_year: i32,
    years: usize,
    rng: &mut impl Rng,
) -> Vec<HistoricalRecord> {
    (0..years)
        .rev()
        .map(|offset| {
            let year = current_year - offset as i32;
            let base = avg_yield_for_year(year);
            let variation = rng.gen_range(0.8..1.2);

            HistoricalRecord {
                year: year.to_string(),
                yield_t_ha: round_2(base * variation),
                rainfall: rng.gen_range(800..1600),
                temperature: round_1(rng.gen_range(26.0..32.0)),
            }
        })
        .collect()
}

/// Climate insights for a district (assumed already validated).
pub fn climate_insights(district: &str, rng: &mut impl Rng) -> ClimateInsights {
    ClimateInsights {
        district: district.to_string(),
        avg_temperature: round_1(rng.gen_range(27.5..30.5)),
        total_rainfall: rng.gen_range(900..1500),
        humidity: rng.gen_range(70..85),
        growing_season: "June - September".to_string(),
        optimal_planting: "Early June".to_string(),
        soil_recommendations: vec![
            "Maintain soil pH between 5.5-6.5".to_string(),
            "Apply organic manure before planting".to_string(),
            "Ensure proper leveling for water management".to_string(),
        ],
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
