//! Static Reference Data
//!
//! Tamil Nadu district/soil/variety tables and historical yield
//! baselines, embedded as immutable statics.

use crate::types::SoilType;

pub static DISTRICTS: &[&str] = &[
    "Chennai",
    "Coimbatore",
    "Madurai",
    "Tiruchirappalli",
    "Salem",
    "Tirunelveli",
    "Thanjavur",
    "Vellore",
    "Erode",
    "Thoothukudi",
    "Dindigul",
    "Kanchipuram",
    "Kanyakumari",
    "Karur",
    "Krishnagiri",
    "Nagapattinam",
    "Namakkal",
    "Perambalur",
    "Pudukkottai",
    "Ramanathapuram",
    "Sivaganga",
    "Theni",
    "Tiruppur",
    "Tiruvallur",
    "Tiruvannamalai",
    "Viluppuram",
    "Virudhunagar",
    "Ariyalur",
    "Cuddalore",
    "Dharmapuri",
    "Nilgiris",
];

pub static RICE_VARIETIES: &[&str] = &[
    "Ponni",
    "Samba",
    "Kichili",
    "Katta",
    "Kullakar",
    "Kuruvai",
    "Thanga Samba",
];

/// Historical yield envelope (t/ha) for one year
#[derive(Debug, Clone, Copy)]
pub struct YieldBaseline {
    pub year: i32,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

pub static HISTORICAL_YIELDS: &[YieldBaseline] = &[
    YieldBaseline { year: 2022, min: 2.8, max: 4.2, avg: 3.5 },
    YieldBaseline { year: 2023, min: 2.9, max: 4.3, avg: 3.6 },
    YieldBaseline { year: 2024, min: 3.0, max: 4.4, avg: 3.7 },
];

/// Fallback average when a year has no recorded baseline
pub const DEFAULT_AVG_YIELD: f64 = 3.5;

/// Average yield baseline for a year, falling back to the state-wide
/// average for years outside the recorded window.
pub fn avg_yield_for_year(year: i32) -> f64 {
    HISTORICAL_YIELDS
        .iter()
        .find(|b| b.year == year)
        .map(|b| b.avg)
        .unwrap_or(DEFAULT_AVG_YIELD)
}

/// Case-insensitive district lookup, returning the canonical name.
pub fn find_district(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    DISTRICTS
        .iter()
        .find(|d| d.eq_ignore_ascii_case(needle))
        .copied()
}

// Cauvery delta districts sit on alluvial deposits
static DELTA_DISTRICTS: &[&str] = &["Thanjavur", "Nagapattinam", "Tiruchirappalli", "Cuddalore"];

/// Typical soil class for a district, used when the caller supplies no
/// explicit soil type. Red soil is the state-wide default.
pub fn typical_soil(district: &str) -> SoilType {
    if DELTA_DISTRICTS.iter().any(|d| d.eq_ignore_ascii_case(district)) {
        SoilType::Alluvial
    } else if district.eq_ignore_ascii_case("Nilgiris") {
        SoilType::Mountain
    } else {
        SoilType::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_district_case_insensitive() {
        assert_eq!(find_district("thanjavur"), Some("Thanjavur"));
        assert_eq!(find_district("  MADURAI "), Some("Madurai"));
        assert_eq!(find_district("Mumbai"), None);
    }

    #[test]
    fn test_avg_yield_for_year() {
        assert_eq!(avg_yield_for_year(2023), 3.6);
        assert_eq!(avg_yield_for_year(1995), DEFAULT_AVG_YIELD);
    }

    #[test]
    fn test_typical_soil() {
        assert_eq!(typical_soil("Thanjavur"), SoilType::Alluvial);
        assert_eq!(typical_soil("Nilgiris"), SoilType::Mountain);
        assert_eq!(typical_soil("Salem"), SoilType::Red);
    }

    #[test]
    fn test_district_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for d in DISTRICTS {
            assert!(seen.insert(*d), "duplicate district {}", d);
        }
    }
}
