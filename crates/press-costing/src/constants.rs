//! Shared constants for the costing engine
//!
//! This module centralizes the magic numbers of the shop's pricing rules.
//! All of them also exist as fields on [`crate::CostingConfig`] /
//! [`crate::PricingTable`] so a caller can override a rule without touching
//! the algorithm; these are the defaults.

// =============================================================================
// Imposition
// =============================================================================

/// Gap left between adjacent pieces on the parent sheet (cm).
/// Covers cutting tolerance and bleed.
pub const PIECE_GAP_CM: f64 = 1.0;

// =============================================================================
// Waste Allowance
// =============================================================================

/// Parent width above which the larger waste allowance applies (cm)
pub const WASTE_WIDTH_THRESHOLD_CM: f64 = 50.0;

/// Spoilage allowance for wide parent sheets, amortized over the cut count
pub const WASTE_WIDE_SHEETS: u32 = 120;

/// Spoilage allowance for narrow parent sheets
pub const WASTE_NARROW_SHEETS: u32 = 100;

// =============================================================================
// Plates
// =============================================================================

/// Parent width above which the large-press plate rate applies (cm).
/// Deliberately distinct from [`WASTE_WIDTH_THRESHOLD_CM`]: waste margin and
/// plate-press capability are separate physical constraints.
pub const PLATE_WIDTH_THRESHOLD_CM: f64 = 54.0;

/// Plate cost per color for the large press
pub const PLATE_RATE_WIDE: f64 = 50.0;

/// Plate cost per color for the small press
pub const PLATE_RATE_NARROW: f64 = 20.0;

// =============================================================================
// Run Pricing
// =============================================================================

/// Press impressions that make up one billing unit
pub const IMPRESSIONS_PER_UNIT: u32 = 1000;

/// Upper bound of the first pricing tier (units)
pub const TIER1_LIMIT: u64 = 10;

/// Upper bound of the second pricing tier (units)
pub const TIER2_LIMIT: u64 = 20;

/// Price per unit in the first tier
pub const TIER1_RATE: f64 = 50.0;

/// Base rate of the second tier; the tier price is `rate × units − units²`
pub const TIER2_BASE_RATE: f64 = 60.0;

/// Price per unit in the third tier
pub const TIER3_RATE: f64 = 40.0;
