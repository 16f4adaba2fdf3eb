use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// A selectable multiplier (work type, university tier, delivery time)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogOption {
    pub label: &'static str,
    pub value: f64,
}

/// A field of study with its absolute base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Thesis,
    Proposal,
}

impl ProjectType {
    /// Fixed price factor applied on top of the thesis price
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Thesis => 1.0,
            Self::Proposal => 0.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thesis => "thesis",
            Self::Proposal => "proposal",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thesis" => Ok(Self::Thesis),
            "proposal" => Ok(Self::Proposal),
            _ => Err(QuoteError::InvalidProjectType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicLevel {
    #[default]
    Master,
    Phd,
}

impl AcademicLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Phd => "phd",
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademicLevel {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "master" => Ok(Self::Master),
            "phd" => Ok(Self::Phd),
            _ => Err(QuoteError::InvalidAcademicLevel(s.to_string())),
        }
    }
}

/// Current user selections
///
/// Multipliers use `0.0` as the "not selected" sentinel and an empty
/// `field_key` means no field of study has been chosen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Selection {
    pub project_type: ProjectType,
    pub academic_level: AcademicLevel,
    pub field_key: String,
    pub work_type_multiplier: f64,
    pub university_multiplier: f64,
    pub time_multiplier: f64,
}

/// Result of the price formula before and after the project type factor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceBreakdown {
    pub thesis_price: f64,
    pub final_price: f64,
}

impl PriceBreakdown {
    /// Create a zero-price breakdown
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Snapshot of the selection and every value derived from it
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Quote {
    pub selection: Selection,
    pub base_price: u64,
    pub project_type_multiplier: f64,
    pub thesis_price: f64,
    pub final_price: f64,
    /// Every required selection has been made and the price is a finite number
    pub is_complete: bool,
}
