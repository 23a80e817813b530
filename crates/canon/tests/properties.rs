//! Property-based tests (§8): random small graphs, checked against the laws
//! the search is supposed to satisfy regardless of which particular graph
//! is thrown at it.

use canon::canonicalize;
use canon::invariant::is_automorphism;
use canon_graph::{Graph, GraphBuilder};
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn graph_from_upper_triangle(n: usize, bits: &[bool]) -> Graph {
    let mut edges = Vec::new();
    let mut idx = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if bits[idx] {
                edges.push((i, j));
            }
            idx += 1;
        }
    }
    GraphBuilder::new(n).edges(edges).build().unwrap()
}

/// `|Aut(G)|` by brute force: every permutation of `{0, ..., n-1}` is tested
/// for automorphism closure (permuting `g` by it reproduces `g` exactly).
/// Only usable for the tiny `n` this test restricts itself to -- it walks all
/// `n!` permutations.
fn brute_force_automorphism_count(g: &Graph) -> usize {
    let n = g.node_count();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut used = vec![false; n];
    let mut count = 0usize;
    fn rec(g: &Graph, perm: &mut [usize], used: &mut [bool], depth: usize, count: &mut usize) {
        let n = perm.len();
        if depth == n {
            if is_automorphism(g, perm) {
                *count += 1;
            }
            return;
        }
        for v in 0..n {
            if !used[v] {
                used[v] = true;
                perm[depth] = v;
                rec(g, perm, used, depth + 1, count);
                used[v] = false;
            }
        }
    }
    rec(g, &mut perm, &mut used, 0, &mut count);
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `cl(G) == cl(pi(G))` for any relabeling `pi` (§8, property 9 / the
    /// "round-trip" scenario 6): canonicalizing a graph and a random
    /// relabeling of it must realize the same canonical adjacency matrix.
    #[test]
    fn canonical_form_is_invariant_under_relabeling(
        n in 2usize..8,
        bits in prop::collection::vec(any::<bool>(), 0..28),
        seed in any::<u64>(),
    ) {
        let pair_count = n * (n - 1) / 2;
        prop_assume!(bits.len() >= pair_count);
        let g = graph_from_upper_triangle(n, &bits[..pair_count]);

        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut StdRng::seed_from_u64(seed));
        let h = g.permuted(&perm);

        let result_g = canonicalize(&g);
        let result_h = canonicalize(&h);

        let canon_g = g.permuted(result_g.cl.lab());
        let canon_h = h.permuted(result_h.cl.lab());
        prop_assert_eq!(canon_g, canon_h);
    }

    /// Structural invariants that must hold for *any* graph (§8, properties
    /// 5 and 7): every recorded generator is a true automorphism, and `mcr`
    /// is strictly ascending with one entry per theta-cell.
    #[test]
    fn orbit_bookkeeping_is_always_consistent(
        n in 1usize..7,
        bits in prop::collection::vec(any::<bool>(), 0..21),
    ) {
        let pair_count = n * n.saturating_sub(1) / 2;
        prop_assume!(bits.len() >= pair_count);
        let g = graph_from_upper_triangle(n, &bits[..pair_count]);
        let result = canonicalize(&g);

        prop_assert_eq!(result.mcr.len(), result.theta.cell_count());

        let mut sorted = result.mcr.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted, result.mcr);

        for aut in &result.autogrp {
            prop_assert!(is_automorphism(&g, aut.lab()));
        }
    }

    /// `autogrp.len() >= log2(|Aut(G)|)` (§8, end-to-end property-based
    /// testing list): the recorded generating set must be small enough
    /// relative to the true group size to plausibly generate it via
    /// orbit-stabilizer, checked against `|Aut(G)|` computed by brute-force
    /// enumeration of all `n!` permutations on `n <= 6`.
    #[test]
    fn generator_count_suffices_for_orbit_stabilizer(
        n in 1usize..=6,
        bits in prop::collection::vec(any::<bool>(), 0..15),
    ) {
        let pair_count = n * n.saturating_sub(1) / 2;
        prop_assume!(bits.len() >= pair_count);
        let g = graph_from_upper_triangle(n, &bits[..pair_count]);
        let result = canonicalize(&g);

        let aut_count = brute_force_automorphism_count(&g);
        // 2^|autogrp| >= |Aut(G)|, i.e. |autogrp| >= log2(|Aut(G)|).
        let bound = 1u64.checked_shl(result.autogrp.len() as u32).unwrap_or(u64::MAX);
        prop_assert!(
            bound >= aut_count as u64,
            "autogrp has {} generators but |Aut(G)| = {}",
            result.autogrp.len(),
            aut_count
        );
    }

    /// Running the same graph through the driver twice must be bitwise
    /// identical (§8, property 8).
    #[test]
    fn canonicalization_is_deterministic(
        n in 1usize..7,
        bits in prop::collection::vec(any::<bool>(), 0..21),
    ) {
        let pair_count = n * n.saturating_sub(1) / 2;
        prop_assume!(bits.len() >= pair_count);
        let g = graph_from_upper_triangle(n, &bits[..pair_count]);

        let a = canonicalize(&g);
        let b = canonicalize(&g);
        prop_assert_eq!(a.cl.lab(), b.cl.lab());
        prop_assert_eq!(a.mcr, b.mcr);
        prop_assert_eq!(a.nodes_processed, b.nodes_processed);
    }
}
