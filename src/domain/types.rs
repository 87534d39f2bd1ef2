//! Location report record and the classifications derived from it.
//!
//! Every field except `address` is optional so a record loaded from a
//! hand-edited JSON file (or a future partial lookup) still renders. The
//! accessor methods below are the single place where fallback display values
//! live; the renderer never touches the raw `Option`s.

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_RADIUS_MILES: f64 = 0.5;
pub const DEFAULT_LOCATION_TYPE: &str = "Commercial";
pub const DEFAULT_PLACEMENT: &str = "Near main entrance";
pub const DEFAULT_RECOMMENDATION: &str = "Review carefully";
pub const MAX_SCORE: u8 = 100;

/// Demographic summary around the location (1 mile radius).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_within_1mi: Option<String>,
}

/// One address's vending-placement metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_traffic_daily: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foot_traffic_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_radius_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl LocationRecord {
    /// A record carrying only the address; everything else falls back.
    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Reject records that cannot describe a real location: a blank
    /// address, or a score outside 0-100.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.address.trim().is_empty() {
            return Err(AppError::invalid_record("Location record has an empty address."));
        }
        for (field, value) in [
            ("score", self.score),
            ("foot_traffic_score", self.foot_traffic_score),
        ] {
            if let Some(v) = value.filter(|&v| v > MAX_SCORE) {
                return Err(AppError::invalid_record(format!(
                    "Location record '{}': {field} {v} is outside 0-{MAX_SCORE}.",
                    self.address
                )));
            }
        }
        Ok(())
    }

    pub fn score(&self) -> u8 {
        self.score.unwrap_or(0)
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score())
    }

    pub fn competition_count(&self) -> u32 {
        self.competition_count.unwrap_or(0)
    }

    pub fn competition_level(&self) -> CompetitionLevel {
        CompetitionLevel::from_count(self.competition_count())
    }

    pub fn competition_radius_miles(&self) -> f64 {
        self.competition_radius_miles.unwrap_or(DEFAULT_RADIUS_MILES)
    }

    pub fn foot_traffic_daily(&self) -> &str {
        self.foot_traffic_daily.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Traffic score as display text (`"N/A"` when unknown).
    pub fn foot_traffic_score(&self) -> String {
        self.foot_traffic_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn location_type(&self) -> &str {
        self.location_type.as_deref().unwrap_or(DEFAULT_LOCATION_TYPE)
    }

    pub fn hours(&self) -> &str {
        self.hours.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn suggested_placement(&self) -> &str {
        self.suggested_placement.as_deref().unwrap_or(DEFAULT_PLACEMENT)
    }

    pub fn estimated_monthly_revenue(&self) -> &str {
        self.estimated_monthly_revenue.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn recommendation(&self) -> &str {
        self.recommendation.as_deref().unwrap_or(DEFAULT_RECOMMENDATION)
    }

    pub fn demographic_primary(&self) -> &str {
        self.demographic(|d| d.primary.as_deref())
    }

    pub fn demographic_median_income(&self) -> &str {
        self.demographic(|d| d.median_income.as_deref())
    }

    pub fn demographic_population(&self) -> &str {
        self.demographic(|d| d.population_within_1mi.as_deref())
    }

    /// Amenities joined for display; empty list gives an empty string.
    pub fn amenities_line(&self) -> String {
        self.amenities.join(", ")
    }

    fn demographic<'a>(&'a self, pick: impl Fn(&'a Demographics) -> Option<&'a str>) -> &'a str {
        self.demographics
            .as_ref()
            .and_then(pick)
            .unwrap_or(NOT_AVAILABLE)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Three-way classification of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ScoreTier::High
        } else if score >= 50 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    /// CSS class suffix.
    pub fn class_name(self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::High => "#22c55e",
            ScoreTier::Medium => "#f59e0b",
            ScoreTier::Low => "#ef4444",
        }
    }
}

/// Competition pressure derived from the number of nearby machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn from_count(count: u32) -> Self {
        if count < 2 {
            CompetitionLevel::Low
        } else if count < 4 {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompetitionLevel::Low => "Low",
            CompetitionLevel::Medium => "Medium",
            CompetitionLevel::High => "High",
        }
    }
}

/// Which location data source to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in illustrative record.
    Mock,
    /// Per-address JSON files under the data directory.
    Dir,
}
