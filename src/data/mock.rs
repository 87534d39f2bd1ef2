//! Built-in illustrative record.

use crate::domain::{Demographics, LocationRecord};
use crate::error::AppError;

use super::LocationSource;

/// Returns the same sample metrics for every address.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl LocationSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch(&self, address: &str) -> Result<LocationRecord, AppError> {
        Ok(sample_record(address))
    }
}

pub fn sample_record(address: &str) -> LocationRecord {
    LocationRecord {
        address: address.to_string(),
        foot_traffic_daily: Some("1,200-1,800".to_string()),
        foot_traffic_score: Some(75),
        competition_count: Some(2),
        competition_radius_miles: Some(0.5),
        demographics: Some(Demographics {
            primary: Some("Families, mixed income".to_string()),
            median_income: Some("$65,000".to_string()),
            population_within_1mi: Some("12,500".to_string()),
        }),
        location_type: Some("Office Building".to_string()),
        hours: Some("9AM-6PM".to_string()),
        amenities: vec![
            "Parking".to_string(),
            "Break Room".to_string(),
            "Elevator".to_string(),
        ],
        suggested_placement: Some("Near main entrance, lobby area".to_string()),
        estimated_monthly_revenue: Some("$150-300".to_string()),
        score: Some(82),
        recommendation: Some("Good fit - proceed with negotiation".to_string()),
    }
}
