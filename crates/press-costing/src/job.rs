//! Job and candidate inputs
//!
//! The two input structs of the engine, with strict boundary validation.
//! The evaluator itself is total; anything malformed is rejected here, with
//! a descriptive error, before the math runs.

use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One print job, immutable per calculation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobParameters {
    /// Finished piece width (cm)
    pub piece_width_cm: f64,
    /// Finished piece height (cm)
    pub piece_height_cm: f64,
    /// Number of finished pieces ordered
    pub quantity: u32,
    /// Single- or double-sided printing
    pub sides: Sides,
    /// Ink colors/separations per side
    pub colors: u32,
    /// Cost of one parent sheet
    pub paper_cost_per_sheet: f64,
}

impl JobParameters {
    /// Validate the job parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.piece_width_cm.is_finite() && self.piece_width_cm > 0.0) {
            return Err(CostingError::Config(format!(
                "Piece width must be a positive number, got {}",
                self.piece_width_cm
            )));
        }
        if !(self.piece_height_cm.is_finite() && self.piece_height_cm > 0.0) {
            return Err(CostingError::Config(format!(
                "Piece height must be a positive number, got {}",
                self.piece_height_cm
            )));
        }
        if self.quantity == 0 {
            return Err(CostingError::Config(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if self.colors == 0 {
            return Err(CostingError::Config(
                "At least one color is required".to_string(),
            ));
        }
        if !(self.paper_cost_per_sheet.is_finite() && self.paper_cost_per_sheet >= 0.0) {
            return Err(CostingError::Config(format!(
                "Paper cost per sheet must be a non-negative number, got {}",
                self.paper_cost_per_sheet
            )));
        }
        Ok(())
    }
}

/// One layout option to try: a parent sheet and how it is pre-cut
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutCandidate {
    /// Parent (press) sheet width (cm)
    pub parent_width_cm: f64,
    /// Parent (press) sheet height (cm)
    pub parent_height_cm: f64,
    /// Identical cut sections the parent sheet is divided into before
    /// pieces are imposed on each section
    pub cut_pieces: u32,
}

impl LayoutCandidate {
    /// Validate the candidate
    pub fn validate(&self) -> Result<()> {
        if !(self.parent_width_cm.is_finite() && self.parent_width_cm > 0.0) {
            return Err(CostingError::Config(format!(
                "Parent width must be a positive number, got {}",
                self.parent_width_cm
            )));
        }
        if !(self.parent_height_cm.is_finite() && self.parent_height_cm > 0.0) {
            return Err(CostingError::Config(format!(
                "Parent height must be a positive number, got {}",
                self.parent_height_cm
            )));
        }
        if self.cut_pieces == 0 {
            return Err(CostingError::Config(
                "Cut pieces must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A full quote request: one job plus the layout options to rank.
/// This is the JSON shape the CLI reads and writes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteRequest {
    pub job: JobParameters,
    pub candidates: Vec<LayoutCandidate>,
}

impl QuoteRequest {
    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let request = serde_json::from_slice(&bytes)
            .map_err(|e| CostingError::Config(format!("Failed to parse request: {}", e)))?;
        Ok(request)
    }

    /// Save the request to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CostingError::Config(format!("Failed to serialize request: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the job and every candidate
    pub fn validate(&self) -> Result<()> {
        self.job.validate()?;
        for candidate in &self.candidates {
            candidate.validate()?;
        }
        Ok(())
    }
}
