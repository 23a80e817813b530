//! End-to-end scenarios (§8): small graphs whose canonical label, orbit
//! partition, and MCR are known by hand, checked against what the driver
//! actually produces.

use canon::canonicalize;
use canon_graph::GraphBuilder;

#[test]
fn empty_graph_has_a_single_orbit() {
    let g = GraphBuilder::new(4).build().unwrap();
    let result = canonicalize(&g);
    assert_eq!(result.mcr, vec![0]);
    assert_eq!(result.theta.cell_count(), 1);
}

#[test]
fn complete_graph_k4_has_the_same_orbit_as_the_empty_graph() {
    let g = GraphBuilder::new(4)
        .edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
        .build()
        .unwrap();
    let result = canonicalize(&g);
    assert_eq!(result.mcr, vec![0]);
    assert_eq!(result.theta.cell_count(), 1);
    assert_eq!(result.cl.len(), 4);
}

#[test]
fn path_p3_swaps_its_two_ends() {
    let g = GraphBuilder::new(3).edges([(0, 1), (1, 2)]).build().unwrap();
    let result = canonicalize(&g);
    assert_eq!(result.mcr, vec![0, 1]);
    assert_eq!(result.theta.cell_count(), 2);
    assert!(result.autogrp.iter().any(|aut| aut.lab() == [2, 1, 0]));
}

#[test]
fn cycle_c4_has_a_single_transitive_orbit() {
    let g = GraphBuilder::new(4)
        .edges([(0, 1), (1, 2), (2, 3), (3, 0)])
        .build()
        .unwrap();
    let result = canonicalize(&g);
    assert_eq!(result.mcr, vec![0]);
    assert_eq!(result.theta.cell_count(), 1);
    assert!(!result.autogrp.is_empty());
}

#[test]
fn star_k13_separates_the_center_from_its_leaves() {
    let g = GraphBuilder::new(4)
        .edges([(0, 1), (0, 2), (0, 3)])
        .build()
        .unwrap();
    let result = canonicalize(&g);
    assert_eq!(result.mcr, vec![0, 1]);
    assert_eq!(result.theta.cell_count(), 2);
}

#[test]
fn isomorphic_relabelings_share_a_canonical_form() {
    let a = GraphBuilder::new(3).edges([(0, 1), (1, 2)]).build().unwrap();
    // the same path, with vertices permuted: 2-0-1.
    let b = GraphBuilder::new(3).edges([(2, 0), (0, 1)]).build().unwrap();

    let result_a = canonicalize(&a);
    let result_b = canonicalize(&b);

    let canon_a = a.permuted(result_a.cl.lab());
    let canon_b = b.permuted(result_b.cl.lab());
    assert_eq!(canon_a, canon_b);
}

#[test]
fn empty_graph_of_zero_nodes_returns_immediately() {
    let g = GraphBuilder::new(0).build().unwrap();
    let result = canonicalize(&g);
    assert!(result.cl.lab().is_empty());
    assert!(result.mcr.is_empty());
    assert!(result.autogrp.is_empty());
    assert_eq!(result.nodes_processed, 0);
}

#[test]
fn repeated_runs_on_the_same_graph_are_bitwise_identical() {
    let g = GraphBuilder::new(6)
        .edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)])
        .build()
        .unwrap();
    let a = canonicalize(&g);
    let b = canonicalize(&g);
    assert_eq!(a.cl.lab(), b.cl.lab());
    assert_eq!(a.mcr, b.mcr);
    assert_eq!(a.theta, b.theta);
    assert_eq!(a.nodes_processed, b.nodes_processed);
}

#[test]
fn every_generator_is_a_genuine_automorphism() {
    let g = GraphBuilder::new(5)
        .edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])
        .build()
        .unwrap();
    let result = canonicalize(&g);
    for aut in &result.autogrp {
        let permuted = g.permuted(aut.lab());
        assert_eq!(permuted, g);
    }
}
