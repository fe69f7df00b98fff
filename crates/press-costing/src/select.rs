//! Candidate selection
//!
//! Ranks a list of layout candidates for one job by total cost, cheapest
//! first, discarding unusable ones. An empty result is a valid business
//! outcome ("no layout fits this job"), not an error.

use crate::evaluate::{EvaluatedRow, evaluate_candidate};
use crate::job::{JobParameters, LayoutCandidate};
use crate::pricing::CostingConfig;
use crate::types::Result;

/// Evaluate and rank candidates, cheapest first.
///
/// Inputs are validated up front; evaluation itself never fails. The sort is
/// stable, so candidates with equal totals keep their input order and
/// identical inputs always produce an identically ordered result.
pub fn rank_candidates(
    job: &JobParameters,
    candidates: &[LayoutCandidate],
    config: &CostingConfig,
) -> Result<Vec<EvaluatedRow>> {
    job.validate()?;
    for candidate in candidates {
        candidate.validate()?;
    }

    let mut rows: Vec<EvaluatedRow> = candidates
        .iter()
        .map(|candidate| evaluate_candidate(job, candidate, config))
        .filter(EvaluatedRow::is_usable)
        .collect();

    rows.sort_by(|a, b| a.total.total_cmp(&b.total));

    Ok(rows)
}

/// The cheapest usable layout, if any candidate fits the job
pub fn cheapest(
    job: &JobParameters,
    candidates: &[LayoutCandidate],
    config: &CostingConfig,
) -> Result<Option<EvaluatedRow>> {
    Ok(rank_candidates(job, candidates, config)?.into_iter().next())
}
