//! Digital (per-click) costing
//!
//! Digital presses have no plates and no spoilage allowance; the shop is
//! billed per click, one click per printed side of a sheet. This is the
//! simple sibling of the offset evaluator.

use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A digital print job
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitalJob {
    /// Number of finished pieces ordered
    pub quantity: u32,
    /// Single- or double-sided printing
    pub sides: Sides,
    /// Finished pieces per output sheet
    pub pieces_per_sheet: u32,
    /// Price per click (one printed side of one sheet)
    pub click_rate: f64,
    /// Cost of one output sheet
    pub paper_cost_per_sheet: f64,
}

impl DigitalJob {
    /// Validate the job
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(CostingError::Config(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if self.pieces_per_sheet == 0 {
            return Err(CostingError::Config(
                "Pieces per sheet must be at least 1".to_string(),
            ));
        }
        if !(self.click_rate.is_finite() && self.click_rate >= 0.0) {
            return Err(CostingError::Config(format!(
                "Click rate must be a non-negative number, got {}",
                self.click_rate
            )));
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

/// Costed digital job
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitalQuote {
    /// Output sheets needed
    pub sheets_required: u64,
    /// Billable clicks
    pub clicks: u64,
    /// Click cost for the run
    pub click_cost: f64,
    /// Paper cost for the run
    pub paper_cost: f64,
    /// Grand total
    pub total: f64,
}

/// Cost a digital job
pub fn digital_cost(job: &DigitalJob) -> Result<DigitalQuote> {
    job.validate()?;

    let sheets_required = (job.quantity as u64).div_ceil(job.pieces_per_sheet as u64);
    let clicks = sheets_required * job.sides.count() as u64;
    let click_cost = clicks as f64 * job.click_rate;
    let paper_cost = sheets_required as f64 * job.paper_cost_per_sheet;

    Ok(DigitalQuote {
        sheets_required,
        clicks,
        click_cost,
        paper_cost,
        total: click_cost + paper_cost,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_cost() {
        let job = DigitalJob {
            quantity: 100,
            sides: Sides::Single,
            pieces_per_sheet: 8,
            click_rate: 0.5,
            paper_cost_per_sheet: 0.2,
        };
        let quote = digital_cost(&job).unwrap();

        // 100 pieces / 8 per sheet = 13 sheets
        assert_eq!(quote.sheets_required, 13);
        assert_eq!(quote.clicks, 13);
        assert!((quote.click_cost - 6.5).abs() < 1e-9);
        assert!((quote.paper_cost - 2.6).abs() < 1e-9);
        assert!((quote.total - 9.1).abs() < 1e-9);
    }

    #[test]
    fn test_duplex_doubles_clicks() {
        let job = DigitalJob {
            quantity: 100,
            sides: Sides::Double,
            pieces_per_sheet: 8,
            click_rate: 0.5,
            paper_cost_per_sheet: 0.2,
        };
        let quote = digital_cost(&job).unwrap();

        assert_eq!(quote.sheets_required, 13);
        assert_eq!(quote.clicks, 26);
        assert!((quote.total - 15.6).abs() < 1e-9);
    }

    #[test]
    fn test_exact_sheet_fit() {
        let job = DigitalJob {
            quantity: 96,
            sides: Sides::Single,
            pieces_per_sheet: 8,
            click_rate: 1.0,
            paper_cost_per_sheet: 0.0,
        };
        let quote = digital_cost(&job).unwrap();

        assert_eq!(quote.sheets_required, 12);
        assert_eq!(quote.total, 12.0);
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let job = DigitalJob {
            quantity: 0,
            sides: Sides::Single,
            pieces_per_sheet: 8,
            click_rate: 0.5,
            paper_cost_per_sheet: 0.2,
        };
        assert!(digital_cost(&job).is_err());
    }
}
