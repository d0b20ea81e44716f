use ndarray::{array, Array2};
use rips_persistence::{
    compute_persistence,
    compute_persistence_from_points,
    edge_boundary_matrix,
    reduce,
    reduce_with,
    BoundaryMatrix,
    Filtration,
    PersistenceConfig,
    PersistenceDiagram,
    PersistenceError,
    ReductionStrategy,
    VietorisRips,
    Zp,
    Z2,
};

fn square_points() -> Array2<f64> {
    array![
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0]
    ]
}

fn cloud() -> Array2<f64> {
    array![
        [0.0, 0.0],
        [1.1, 0.1],
        [2.0, 0.9],
        [1.9, 2.1],
        [0.8, 2.8],
        [-0.4, 1.7],
        [3.2, 1.4],
        [0.9, 1.2]
    ]
}

fn lifetimes(pd: &PersistenceDiagram, d: usize) -> Vec<(f64, f64)> {
    pd.dim(d).iter().map(|i| (i.birth, i.death)).collect()
}

#[test]
fn single_edge_has_one_essential_component() {
    let f = Filtration::from_edges(2, [(0, 1, 0.5)]).unwrap();
    let pd = compute_persistence(&f, &PersistenceConfig::default()).unwrap();

    assert_eq!(pd.essential_intervals(0).len(), 1);
    assert!(pd.dim(1).is_empty());
}

#[test]
fn empty_input_has_no_intervals() {
    let f = Filtration::from_edges(0, []).unwrap();
    let pd = compute_persistence(&f, &PersistenceConfig::default()).unwrap();
    assert!(pd.is_empty());

    let no_points = Array2::<f64>::zeros((0, 2));
    let pd = compute_persistence_from_points(&no_points, 1.0, &PersistenceConfig::default()).unwrap();
    assert!(pd.is_empty());
}

#[test]
fn zero_column_never_merges() {
    let mut m = BoundaryMatrix::new(Z2, 0, 3);
    m.add_column(0, [(1, 1), (2, 1)]).unwrap();
    m.add_column(1, []).unwrap();
    m.add_column(2, [(0, 1), (1, 1)]).unwrap();

    let stats = reduce(&mut m);
    assert_eq!(stats.merges, 0);
    assert!(m.column(1).unwrap().is_empty());
    assert_eq!(m.pivots(), vec![Some(2), None, Some(1)]);
}

#[test]
fn square_has_one_loop() {
    let pd = compute_persistence_from_points(
        &square_points(),
        f64::INFINITY,
        &PersistenceConfig::default(),
    )
    .unwrap();

    let loops = pd.finite_intervals(1);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].birth, 1.0);
    assert!((loops[0].death - 2.0_f64.sqrt()).abs() < 1e-12);
    // Closed by the last unit side, filled when the first diagonal appears
    assert_eq!(loops[0].birth_edge, Some((2, 3)));
    assert_eq!(loops[0].death_edge, Some((0, 2)));
    assert!(pd.essential_intervals(1).is_empty());

    assert_eq!(pd.count(0), 3);
    assert_eq!(pd.essential_intervals(0).len(), 1);
}

#[test]
fn square_loop_needs_diagonals_within_bound() {
    // Diagonals (√2) excluded: the loop never dies
    let pd = compute_persistence_from_points(&square_points(), 1.2, &PersistenceConfig::default()).unwrap();
    let loops = pd.essential_intervals(1);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].birth, 1.0);
    assert_eq!(loops[0].edge, Some(3));
    assert_eq!(pd.to_text(1), "1\t-1\n");
}

#[test]
fn square_over_prime_fields() {
    let binary = compute_persistence_from_points(
        &square_points(),
        f64::INFINITY,
        &PersistenceConfig::default(),
    )
    .unwrap();

    for p in [3, 5, 7, 2_147_483_647] {
        let config = PersistenceConfig::default().with_modulus(p);
        let pd = compute_persistence_from_points(&square_points(), f64::INFINITY, &config).unwrap();
        assert_eq!(lifetimes(&pd, 0), lifetimes(&binary, 0), "p = {p}");
        assert_eq!(lifetimes(&pd, 1), lifetimes(&binary, 1), "p = {p}");
    }
}

#[test]
fn restart_scan_handles_collision_chain() {
    // Column 4 collides with 3, then 2, then 1, then 0
    let mut m = BoundaryMatrix::new(Z2, 1, 6);
    m.add_column(0, [(0, 1), (1, 1)]).unwrap();
    m.add_column(1, [(1, 1), (2, 1)]).unwrap();
    m.add_column(2, [(2, 1), (3, 1)]).unwrap();
    m.add_column(3, [(3, 1), (4, 1)]).unwrap();
    m.add_column(4, [(4, 1)]).unwrap();

    let stats = reduce(&mut m);
    assert_eq!(stats.merges, 4);
    assert_eq!(m.column(4).unwrap().rows().collect::<Vec<_>>(), vec![0]);
    assert!(m.is_reduced());
}

#[test]
fn mod_three_merge_uses_negated_inverse() {
    let f = Zp::new(3).unwrap();
    let mut m = BoundaryMatrix::new(f, 1, 6);
    m.add_column(0, [(0, 2), (5, 1)]).unwrap();
    m.add_column(1, [(5, 2)]).unwrap();

    reduce(&mut m);
    // factor 1: pivot 2 + 1 ≡ 0 removed, row 0 gains 2 · 1
    assert_eq!(m.column(1).unwrap().entries().collect::<Vec<_>>(), vec![(0, 2)]);
}

#[test]
fn binary_engine_matches_prime_two() {
    let f = VietorisRips::from_points(&cloud(), 2.5).unwrap().filtration().unwrap();
    let z2 = compute_persistence(&f, &PersistenceConfig::default()).unwrap();
    let zp = compute_persistence(&f, &PersistenceConfig::default().with_modulus(2)).unwrap();

    assert_eq!(z2.intervals, zp.intervals);
    assert_eq!(z2.stats, zp.stats);
    assert_ne!(z2.field, zp.field);
}

#[test]
fn strategies_give_identical_diagrams() {
    let f = VietorisRips::from_points(&cloud(), 3.0).unwrap().filtration().unwrap();
    for modulus in [0, 5] {
        let scan = PersistenceConfig::default().with_modulus(modulus);
        let lookup = scan.clone().with_strategy(ReductionStrategy::PivotLookup);

        let a = compute_persistence(&f, &scan).unwrap();
        let b = compute_persistence(&f, &lookup).unwrap();
        assert_eq!(a.intervals, b.intervals);
    }
}

#[test]
fn output_is_deterministic() {
    let f = VietorisRips::from_points(&cloud(), 2.0).unwrap().filtration().unwrap();
    let config = PersistenceConfig::default().with_modulus(3).with_generators(true);
    let a = compute_persistence(&f, &config).unwrap();
    let b = compute_persistence(&f, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_text(0), b.to_text(0));
}

#[test]
fn generators_attach_to_finite_intervals() {
    let config = PersistenceConfig::default().with_generators(true);
    let pd = compute_persistence_from_points(&square_points(), f64::INFINITY, &config).unwrap();

    for interval in pd.finite_intervals(0) {
        let generator = interval.generator.as_ref().unwrap();
        // The killing edge always contributes to its own column
        assert!(generator.contains(&interval.edge.unwrap()));
    }
    for interval in pd.essential_intervals(0) {
        assert!(interval.generator.is_none());
    }
    let untracked = compute_persistence_from_points(
        &square_points(),
        f64::INFINITY,
        &PersistenceConfig::default(),
    )
    .unwrap();
    assert!(untracked.intervals.iter().all(|i| i.generator.is_none()));
}

#[test]
fn square_loop_generator_is_its_four_sides() {
    let f = VietorisRips::from_points(&square_points(), f64::INFINITY)
        .unwrap()
        .filtration()
        .unwrap();

    for modulus in [0, 3] {
        let config = PersistenceConfig::default().with_modulus(modulus).with_generators(true);
        let pd = compute_persistence(&f, &config).unwrap();

        let loops = pd.finite_intervals(1);
        let generator = loops[0].generator.as_ref().unwrap();
        let mut sides: Vec<(usize, usize)> = generator
            .iter()
            .map(|&e| f.edge(e).unwrap().endpoints())
            .collect();
        sides.sort_unstable();
        assert_eq!(sides, vec![(0, 1), (0, 3), (1, 2), (2, 3)], "modulus {modulus}");
    }
}

#[test]
fn malformed_column_fails_fast() {
    let mut m = BoundaryMatrix::new(Z2, 0, 3);
    m.add_column(0, [(0, 1), (1, 1)]).unwrap();
    let err = m.add_column(1, [(1, 1), (9, 1)]).unwrap_err();
    assert_eq!(err, PersistenceError::RowOutOfRange { column: 1, row: 9, rows: 3 });
    assert!(!err.is_configuration());
}

#[test]
fn idempotent_edge_reduction() {
    let f = VietorisRips::from_points(&cloud(), 2.5).unwrap().filtration().unwrap();
    let mut m = edge_boundary_matrix(&f, Zp::new(7).unwrap()).unwrap();
    let first = reduce_with(&mut m, ReductionStrategy::Scan, None);
    assert!(first.merges > 0);

    let second = reduce(&mut m);
    assert_eq!(second.merges, 0);
    assert_eq!(second.initial_entries, second.final_entries);
}

#[test]
fn table_matches_text() {
    let pd = compute_persistence_from_points(&cloud(), 2.5, &PersistenceConfig::default()).unwrap();
    for d in 0..=1 {
        let table = pd.to_table(d);
        let text = pd.to_text(d);
        assert_eq!(table.nrows(), text.lines().count());
        for (row, line) in table.rows().into_iter().zip(text.lines()) {
            let fields: Vec<f64> = line.split('\t').map(|s| s.parse().unwrap()).collect();
            assert_eq!(fields, vec![row[0], row[1]]);
        }
    }
}

#[test]
fn config_and_intervals_serialize() {
    let config: PersistenceConfig = serde_json::from_str(r#"{"modulus": 3}"#).unwrap();
    assert_eq!(config, PersistenceConfig::default().with_modulus(3));

    let pd = compute_persistence_from_points(&square_points(), f64::INFINITY, &config).unwrap();
    let json = serde_json::to_string(pd.finite_intervals(1)[0]).unwrap();
    let back: rips_persistence::Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, pd.finite_intervals(1)[0]);
}
