use press_costing::*;

fn business_card_job() -> JobParameters {
    JobParameters {
        piece_width_cm: 9.0,
        piece_height_cm: 5.5,
        quantity: 1000,
        sides: Sides::Single,
        colors: 4,
        paper_cost_per_sheet: 0.24,
    }
}

fn full_sheet_65x90() -> LayoutCandidate {
    LayoutCandidate {
        parent_width_cm: 65.0,
        parent_height_cm: 90.0,
        cut_pieces: 1,
    }
}

#[test]
fn test_business_card_on_65x90() {
    let row = evaluate_candidate(
        &business_card_job(),
        &full_sheet_65x90(),
        &CostingConfig::default(),
    );

    // Upright: floor(65/6.5) × floor(90/10) = 10 × 9 = 90
    // Rotated: floor(65/10) × floor(90/6.5) = 6 × 13 = 78
    assert_eq!(row.imposition_count, 90);
    assert!(row.parity_ok);
    assert_eq!(row.ups_per_sheet, 90);
    // Width 65 > 50, so the wide allowance applies
    assert_eq!(row.waste_sheets, 120);
    // ceil(1000/90 + 120) = 132
    assert_eq!(row.sheets_required, 132);
    assert!((row.paper_cost - 31.68).abs() < 1e-9);
    // ceil(132 × 1 × 4 × 1 / 1000) = 1, floored at 4 colors
    assert_eq!(row.units, 4);
    assert_eq!(row.unit_price, 200.0);
    // Width 65 > 54, so the large-press plate rate applies
    assert_eq!(row.plate_per_side, 200.0);
    assert_eq!(row.plate_total, 200.0);
    assert!((row.total - 431.68).abs() < 1e-9);
}

#[test]
fn test_duplex_even_imposition() {
    let job = JobParameters {
        sides: Sides::Double,
        ..business_card_job()
    };
    let row = evaluate_candidate(&job, &full_sheet_65x90(), &CostingConfig::default());

    // 90 ups is even, so the parity rule is satisfied
    assert!(row.parity_ok);
    assert_eq!(row.units, 4);
    // Plates double with the second side
    assert_eq!(row.plate_total, 400.0);
    assert!((row.total - 631.68).abs() < 1e-9);
}

#[test]
fn test_duplex_odd_imposition_doubles_units() {
    let job = JobParameters {
        piece_width_cm: 15.0,
        piece_height_cm: 10.0,
        quantity: 1000,
        sides: Sides::Double,
        colors: 1,
        paper_cost_per_sheet: 0.1,
    };
    let candidate = LayoutCandidate {
        parent_width_cm: 35.0,
        parent_height_cm: 50.0,
        cut_pieces: 1,
    };
    let row = evaluate_candidate(&job, &candidate, &CostingConfig::default());

    // Upright: floor(35/11) × floor(50/16) = 3 × 3 = 9 (odd)
    assert_eq!(row.imposition_count, 9);
    assert!(!row.parity_ok);
    assert_eq!(row.waste_sheets, 100);
    // ceil(1000/9 + 100) = 212
    assert_eq!(row.sheets_required, 212);
    // base units max(1, ceil(424/1000)) = 1, doubled by the failed parity check
    assert_eq!(row.units, 2);
    assert_eq!(row.unit_price, 100.0);
    assert_eq!(row.plate_per_side, 20.0);
    assert_eq!(row.plate_total, 40.0);
    assert!((row.total - 161.2).abs() < 1e-9);
}

#[test]
fn test_cut_sheet_amortizes_waste() {
    let candidate = LayoutCandidate {
        parent_width_cm: 45.0,
        parent_height_cm: 65.0,
        cut_pieces: 2,
    };
    let row = evaluate_candidate(
        &business_card_job(),
        &candidate,
        &CostingConfig::default(),
    );

    // Rotated wins: floor(45/10) × floor(65/6.5) = 4 × 10 = 40
    assert_eq!(row.imposition_count, 40);
    assert_eq!(row.ups_per_sheet, 80);
    // Narrow allowance 100, split over 2 cuts
    assert_eq!(row.waste_sheets, 50);
    // ceil(1000/80 + 50) = 63
    assert_eq!(row.sheets_required, 63);
    assert!((row.paper_cost - 15.12).abs() < 1e-9);
    assert_eq!(row.units, 4);
    assert_eq!(row.plate_per_side, 80.0);
    assert!((row.total - 295.12).abs() < 1e-9);
}

#[test]
fn test_oversize_piece_is_sentinel() {
    let job = JobParameters {
        piece_width_cm: 200.0,
        piece_height_cm: 200.0,
        ..business_card_job()
    };
    let row = evaluate_candidate(&job, &full_sheet_65x90(), &CostingConfig::default());

    assert_eq!(row.imposition_count, 0);
    assert_eq!(row.ups_per_sheet, 0);
    assert_eq!(row.sheets_required, 0);
    assert_eq!(row.total, 0.0);
    assert!(!row.is_usable());
}

#[test]
fn test_zero_quantity_is_sentinel() {
    let job = JobParameters {
        quantity: 0,
        ..business_card_job()
    };
    let row = evaluate_candidate(&job, &full_sheet_65x90(), &CostingConfig::default());

    assert_eq!(row.sheets_required, 0);
    assert_eq!(row.total, 0.0);
}

#[test]
fn test_simplex_ignores_parity() {
    // 9 ups is odd, but single-sided jobs have no registration constraint
    let job = JobParameters {
        piece_width_cm: 15.0,
        piece_height_cm: 10.0,
        quantity: 1000,
        sides: Sides::Single,
        colors: 1,
        paper_cost_per_sheet: 0.1,
    };
    let candidate = LayoutCandidate {
        parent_width_cm: 35.0,
        parent_height_cm: 50.0,
        cut_pieces: 1,
    };
    let row = evaluate_candidate(&job, &candidate, &CostingConfig::default());

    assert_eq!(row.imposition_count, 9);
    assert!(row.parity_ok);
    assert_eq!(row.units, 1);
}

#[test]
fn test_waste_threshold_is_strict() {
    let job = business_card_job();
    let config = CostingConfig::default();

    let at_threshold = LayoutCandidate {
        parent_width_cm: 50.0,
        parent_height_cm: 70.0,
        cut_pieces: 1,
    };
    assert_eq!(evaluate_candidate(&job, &at_threshold, &config).waste_sheets, 100);

    let above_threshold = LayoutCandidate {
        parent_width_cm: 50.5,
        parent_height_cm: 70.0,
        cut_pieces: 1,
    };
    assert_eq!(
        evaluate_candidate(&job, &above_threshold, &config).waste_sheets,
        120
    );
}

#[test]
fn test_plate_threshold_is_strict() {
    let job = business_card_job();
    let config = CostingConfig::default();

    let at_threshold = LayoutCandidate {
        parent_width_cm: 54.0,
        parent_height_cm: 70.0,
        cut_pieces: 1,
    };
    assert_eq!(
        evaluate_candidate(&job, &at_threshold, &config).plate_per_side,
        80.0
    );

    let above_threshold = LayoutCandidate {
        parent_width_cm: 54.5,
        parent_height_cm: 70.0,
        cut_pieces: 1,
    };
    assert_eq!(
        evaluate_candidate(&job, &above_threshold, &config).plate_per_side,
        200.0
    );
}

#[test]
fn test_huge_sheet_does_not_overflow() {
    // A tiny piece on an enormous (but valid) sheet pushes the imposition
    // count far past u32::MAX; counts must stay exact, not wrap or panic
    let job = JobParameters {
        piece_width_cm: 0.5,
        piece_height_cm: 0.5,
        ..business_card_job()
    };
    let candidate = LayoutCandidate {
        parent_width_cm: 1_000_000.0,
        parent_height_cm: 1_000_000.0,
        cut_pieces: 1,
    };
    job.validate().unwrap();
    candidate.validate().unwrap();

    let row = evaluate_candidate(&job, &candidate, &CostingConfig::default());

    // floor(1e6/1.5)² = 666,666²
    assert_eq!(row.imposition_count, 666_666 * 666_666);
    assert!(row.is_usable());
    assert!(row.total.is_finite());
    assert!(row.total > 0.0);
}

#[test]
fn test_zero_cut_pieces_is_sentinel_not_panic() {
    // rank_candidates rejects this up front, but direct evaluation must
    // stay total and fall through to the sentinel
    let candidate = LayoutCandidate {
        parent_width_cm: 65.0,
        parent_height_cm: 90.0,
        cut_pieces: 0,
    };
    let row = evaluate_candidate(
        &business_card_job(),
        &candidate,
        &CostingConfig::default(),
    );

    assert_eq!(row.ups_per_sheet, 0);
    assert_eq!(row.sheets_required, 0);
    assert_eq!(row.total, 0.0);
    assert!(!row.is_usable());
}

#[test]
fn test_evaluation_is_pure() {
    let job = business_card_job();
    let candidate = full_sheet_65x90();
    let config = CostingConfig::default();

    let first = evaluate_candidate(&job, &candidate, &config);
    let second = evaluate_candidate(&job, &candidate, &config);
    assert_eq!(first, second);
}

#[test]
fn test_configurable_gap() {
    let config = CostingConfig {
        gap_cm: 0.0,
        ..Default::default()
    };
    let row = evaluate_candidate(&business_card_job(), &full_sheet_65x90(), &config);

    // Without the gap the rotated orientation wins:
    // floor(65/9) × floor(90/5.5) = 7 × 16 = 112
    assert_eq!(row.imposition_count, 112);
}
