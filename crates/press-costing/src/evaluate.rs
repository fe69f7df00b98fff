//! Row evaluation
//!
//! Derives the full set of costing metrics for one layout candidate:
//! 1. Impose the piece in both orientations, keep the better count
//! 2. Apply the duplex parity rule
//! 3. Amortize the waste allowance over the cut count
//! 4. Compute sheets, paper cost, billing units, run price, and plates
//!
//! The whole pass is a total function: nothing here errors or panics, and
//! unusable candidates come back with `total = 0` as an explicit sentinel.

use crate::job::{JobParameters, LayoutCandidate};
use crate::pricing::CostingConfig;
use crate::types::Sides;

/// Fully evaluated layout candidate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedRow {
    /// Parent sheet width (cm)
    pub parent_width_cm: f64,
    /// Parent sheet height (cm)
    pub parent_height_cm: f64,
    /// Cut sections per parent sheet
    pub cut_pieces: u32,
    /// Pieces per cut section, best of the two orientations
    pub imposition_count: u64,
    /// Whether the duplex parity constraint is satisfied
    pub parity_ok: bool,
    /// Pieces per full parent sheet
    pub ups_per_sheet: u64,
    /// Fixed spoilage allowance in parent sheets
    pub waste_sheets: u32,
    /// Parent sheets needed including waste; 0 marks an unusable candidate
    pub sheets_required: u64,
    /// Paper cost for the run
    pub paper_cost: f64,
    /// Billing units for the run-price lookup
    pub units: u64,
    /// Run price from the pricing table
    pub unit_price: f64,
    /// Plate setup cost per side
    pub plate_per_side: f64,
    /// Plate setup cost across all sides
    pub plate_total: f64,
    /// Grand total; 0 is reserved to mean "invalid, do not consider"
    pub total: f64,
}

impl EvaluatedRow {
    /// Whether the selector should keep this row
    pub fn is_usable(&self) -> bool {
        self.total > 0.0
            && self.sheets_required > 0
            && self.imposition_count > 0
            && self.ups_per_sheet > 0
    }
}

/// How many piece spans (piece + gap) fit along one sheet dimension.
/// Counts and their products are kept in u64 with saturation so that
/// arbitrarily large (but valid) sheet dimensions cannot overflow.
fn fit_along(span_cm: f64, piece_cm: f64, gap_cm: f64) -> u64 {
    let step = piece_cm + gap_cm;
    if step <= 0.0 {
        return 0;
    }
    (span_cm / step).floor() as u64
}

/// Evaluate one layout candidate against a job.
///
/// Order matters: each step consumes the previous one. See the module docs
/// for the pipeline; the duplex parity rule doubles the billing units when
/// the imposition count is odd, because the press must run twice to balance
/// front/back registration.
pub fn evaluate_candidate(
    job: &JobParameters,
    candidate: &LayoutCandidate,
    config: &CostingConfig,
) -> EvaluatedRow {
    let gap = config.gap_cm;
    let pw = candidate.parent_width_cm;
    let ph = candidate.parent_height_cm;

    // Imposition: try the piece both ways, keep the better count
    let upright = fit_along(pw, job.piece_height_cm, gap)
        .saturating_mul(fit_along(ph, job.piece_width_cm, gap));
    let rotated = fit_along(pw, job.piece_width_cm, gap)
        .saturating_mul(fit_along(ph, job.piece_height_cm, gap));
    let imposition_count = upright.max(rotated);

    // Duplex jobs need an even ups-count for back registration
    let parity_ok = match job.sides {
        Sides::Single => true,
        Sides::Double => imposition_count % 2 == 0,
    };

    let ups_per_sheet = imposition_count.saturating_mul(candidate.cut_pieces as u64);

    // Fixed spoilage allowance, amortized over the cut count. A zero cut
    // count is rejected by validation, but evaluation stays total for
    // direct callers: it falls through to the sentinel like zero quantity.
    let allowance = if pw > config.waste_width_threshold_cm {
        config.waste_wide_sheets
    } else {
        config.waste_narrow_sheets
    };
    let waste_sheets = if candidate.cut_pieces == 0 {
        0
    } else {
        allowance.div_ceil(candidate.cut_pieces)
    };

    let sheets_required = if ups_per_sheet == 0 || job.quantity == 0 {
        0
    } else {
        (job.quantity as f64 / ups_per_sheet as f64 + waste_sheets as f64).ceil() as u64
    };

    let paper_cost = sheets_required as f64 * job.paper_cost_per_sheet;

    // Billing units: impressions per thousand, floored at the color count,
    // doubled when the parity check fails
    let impressions = sheets_required
        .saturating_mul(candidate.cut_pieces as u64)
        .saturating_mul(job.colors as u64)
        .saturating_mul(job.sides.count() as u64);
    let core_units = impressions.div_ceil((config.impressions_per_unit as u64).max(1));
    let base_units = core_units.max(job.colors as u64);
    let units = if parity_ok { base_units } else { base_units * 2 };

    let unit_price = config.pricing.price(units as f64);

    let plate_rate = if pw > config.plate_width_threshold_cm {
        config.plate_rate_wide
    } else {
        config.plate_rate_narrow
    };
    let plate_per_side = plate_rate * job.colors as f64;
    let plate_total = plate_per_side * job.sides.count() as f64;

    let total = if sheets_required == 0 || imposition_count == 0 {
        0.0
    } else {
        unit_price + paper_cost + plate_total
    };

    EvaluatedRow {
        parent_width_cm: pw,
        parent_height_cm: ph,
        cut_pieces: candidate.cut_pieces,
        imposition_count,
        parity_ok,
        ups_per_sheet,
        waste_sheets,
        sheets_required,
        paper_cost,
        units,
        unit_price,
        plate_per_side,
        plate_total,
        total,
    }
}
