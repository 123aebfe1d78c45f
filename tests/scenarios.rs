//! End-to-end scenarios covering the full CostModel → solver → result
//! pipeline on small geometric instances.

use hungarian_wells::{cost_model, result, solver, Point};

fn solve_instance(n: usize, k: usize, wells: &[Point], houses: &[Point]) -> result::Assignment {
    let model = cost_model::build(n, k, wells, houses).unwrap();
    let solution = solver::solve(&model.matrix).unwrap();
    result::assemble(k, wells, houses, &solution.matching)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn trivial_one_by_one() {
    let wells = vec![Point::new(0.0, 0.0)];
    let houses = vec![Point::new(3.0, 4.0)];
    let assignment = solve_instance(1, 1, &wells, &houses);
    assert_eq!(assignment.pairs, vec![vec![0]]);
    assert_close(assignment.total_distance, 5.0);
}

#[test]
fn documented_two_by_two() {
    let wells = vec![Point::new(2.5, 1.5), Point::new(0.8, 1.5)];
    let houses = vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(1.0, 2.0),
    ];
    let assignment = solve_instance(2, 2, &wells, &houses);
    // wellA=(2.5,1.5)->{h1,h2} and wellB=(0.8,1.5)->{h0,h3}: 2*0.7071 + 2*0.5385
    assert_close(assignment.total_distance, 2.4912);
}

#[test]
fn symmetric_two_by_one() {
    let wells = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let houses = vec![Point::new(0.0, 1.0), Point::new(10.0, 1.0)];
    let assignment = solve_instance(2, 1, &wells, &houses);
    assert_eq!(assignment.pairs, vec![vec![0], vec![1]]);
    assert_close(assignment.total_distance, 2.0);
}

#[test]
fn forced_swap() {
    let wells = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    let houses = vec![Point::new(1.0, 0.0), Point::new(0.0, 0.0)];
    let assignment = solve_instance(2, 1, &wells, &houses);
    assert_eq!(assignment.pairs, vec![vec![1], vec![0]]);
    assert_close(assignment.total_distance, 0.0);
}

#[test]
fn duplicate_tie_break() {
    let wells = vec![Point::new(0.0, 0.0)];
    let houses = vec![
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-1.0, 0.0),
    ];
    let assignment = solve_instance(1, 3, &wells, &houses);
    assert_eq!(assignment.pairs.len(), 1);
    let mut assigned = assignment.pairs[0].clone();
    assigned.sort_unstable();
    assert_eq!(assigned, vec![0, 1, 2]);
    assert_close(assignment.total_distance, 3.0);
}

#[test]
fn rejects_house_count_mismatch() {
    let wells = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    let houses = vec![Point::new(0.0, 0.0)];
    assert!(cost_model::build(2, 1, &wells, &houses).is_err());
}
