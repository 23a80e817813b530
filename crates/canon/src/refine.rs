//! Equitable partition refinement (§4.1).
//!
//! Given a partition `pi` and an active worklist `alpha` of cells to refine
//! against, [`refine`] produces the coarsest partition that refines `pi` and
//! is equitable with respect to every cell `alpha` ever holds, including the
//! fragments appended to it as the refinement proceeds.

use canon_graph::Graph;

use crate::partition::Partition;

/// Splits `pi`'s cell at `[cell_start, cell_start + cell_size)` into
/// contiguous runs grouped by scoped degree against `scope`, sorted
/// ascending by that degree (§4.1, steps 1-3).
///
/// Computes `d(v)` for every vertex in the cell, stable-sorts the cell by
/// `d`, then marks cell boundaries wherever consecutive `d` values differ.
fn partition_by_scoped_degree(
    g: &Graph,
    pi: &mut Partition,
    cell_start: usize,
    cell_size: usize,
    scope: &[usize],
) {
    let (lab_slice, _) = pi.cell_slice_mut(cell_start, cell_size);
    let mut entries: Vec<(usize, usize)> = lab_slice
        .iter()
        .map(|&v| (g.scoped_degree(v, scope), v))
        .collect();
    entries.sort_by_key(|&(degree, _)| degree);

    let (lab_slice, ptn_slice) = pi.cell_slice_mut(cell_start, cell_size);
    for (i, &(degree, v)) in entries.iter().enumerate() {
        lab_slice[i] = v;
        let is_last = i + 1 == cell_size;
        ptn_slice[i] = !is_last && entries[i + 1].0 == degree;
    }
}

/// Equitable refinement: produces the coarsest partition that refines `pi`
/// and is equitable with respect to `active`'s cells (§4.1).
///
/// `active` seeds the refining worklist α; it is not mutated, a copy is made
/// internally.
pub fn refine(g: &Graph, pi: &Partition, active: &Partition) -> Partition {
    let mut pi_hat = pi.clone();
    let mut alpha = active.clone();
    let mut a = 0;

    while a < alpha.cell_count() && !pi_hat.is_discrete() {
        let (scope_start, scope_size) = alpha.cell(a);
        let scope: Vec<usize> = alpha.lab()[scope_start..scope_start + scope_size].to_vec();

        let mut p = 0;
        while p < pi_hat.cell_count() {
            // Must be computed before the cell at `p` is split: afterwards
            // the same position no longer denotes one cell.
            let alpha_idx = alpha.index_of_cell_matching(&pi_hat, p);

            let (cell_start, cell_size) = pi_hat.cell(p);
            partition_by_scoped_degree(g, &mut pi_hat, cell_start, cell_size, &scope);

            let new_cell_count = pi_hat.sub_cell_count(cell_start, cell_size);
            if new_cell_count == 1 {
                p += 1;
                continue;
            }

            let t = pi_hat.largest_cell_index_in_range(p, p + new_cell_count);

            match alpha_idx {
                Some(alpha_idx) => {
                    alpha.overwrite_cell_from(&pi_hat, t, alpha_idx);
                    for i in p..p + new_cell_count {
                        if i != t {
                            alpha.append_cell_from(&pi_hat, i);
                        }
                    }
                }
                None => {
                    for i in p..p + new_cell_count {
                        alpha.append_cell_from(&pi_hat, i);
                    }
                }
            }
            // `p` stays put: position `p` now denotes the first fragment.
        }
        a += 1;
    }

    pi_hat
}
