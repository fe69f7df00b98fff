//! Run pricing
//!
//! The tiered unit-price table and the bundle of numeric knobs the rest of
//! the engine reads its thresholds from. Both carry `Default` impls encoding
//! the shop's current rules (see [`crate::constants`]).

use crate::constants::*;

/// Tiered run-price table mapping billing units to a price.
///
/// The three tiers are contiguous with no gaps, but the formulas are not
/// continuous at the tier boundaries. That is the shop's actual price list
/// (the middle tier tapers, the top tier drops to a flat volume rate), so it
/// is reproduced exactly rather than smoothed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingTable {
    /// Upper bound (inclusive) of the first tier
    pub tier1_limit: u64,
    /// Upper bound (inclusive) of the second tier
    pub tier2_limit: u64,
    /// Price per unit in the first tier
    pub tier1_rate: f64,
    /// Base rate of the second tier: `price = rate × units − units²`
    pub tier2_base_rate: f64,
    /// Price per unit in the third tier
    pub tier3_rate: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            tier1_limit: TIER1_LIMIT,
            tier2_limit: TIER2_LIMIT,
            tier1_rate: TIER1_RATE,
            tier2_base_rate: TIER2_BASE_RATE,
            tier3_rate: TIER3_RATE,
        }
    }
}

impl PricingTable {
    /// Price for a unit count.
    ///
    /// Input is coerced to a non-negative integer: fractional values are
    /// floored, negative or NaN values clamp to zero, oversized values
    /// saturate. Always returns a defined, non-negative number.
    pub fn price(&self, units: f64) -> f64 {
        // max() discards NaN; the float-to-int cast saturates
        let units = units.floor().max(0.0) as u64;

        if units <= self.tier1_limit {
            self.tier1_rate * units as f64
        } else if units <= self.tier2_limit {
            self.tier2_base_rate * units as f64 - (units * units) as f64
        } else {
            self.tier3_rate * units as f64
        }
    }
}

/// All numeric knobs of the costing rules in one injectable struct.
///
/// The engine never reads globals; evaluation takes one of these. `Default`
/// encodes the shop's current rules.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostingConfig {
    /// Gap between adjacent pieces on the sheet (cm)
    pub gap_cm: f64,
    /// Parent width above which the larger waste allowance applies (cm)
    pub waste_width_threshold_cm: f64,
    /// Spoilage allowance for parent sheets wider than the threshold
    pub waste_wide_sheets: u32,
    /// Spoilage allowance for narrower parent sheets
    pub waste_narrow_sheets: u32,
    /// Parent width above which the large-press plate rate applies (cm)
    pub plate_width_threshold_cm: f64,
    /// Plate cost per color on the large press
    pub plate_rate_wide: f64,
    /// Plate cost per color on the small press
    pub plate_rate_narrow: f64,
    /// Press impressions per billing unit
    pub impressions_per_unit: u32,
    /// Run-price table
    pub pricing: PricingTable,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            gap_cm: PIECE_GAP_CM,
            waste_width_threshold_cm: WASTE_WIDTH_THRESHOLD_CM,
            waste_wide_sheets: WASTE_WIDE_SHEETS,
            waste_narrow_sheets: WASTE_NARROW_SHEETS,
            plate_width_threshold_cm: PLATE_WIDTH_THRESHOLD_CM,
            plate_rate_wide: PLATE_RATE_WIDE,
            plate_rate_narrow: PLATE_RATE_NARROW,
            impressions_per_unit: IMPRESSIONS_PER_UNIT,
            pricing: PricingTable::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
