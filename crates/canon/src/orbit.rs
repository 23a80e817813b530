//! Automorphism group bookkeeping: orbit (θ) merging and MCR (§4.5).

use std::collections::BTreeMap;

use crate::partition::Partition;

/// A sequential union-find over `{0, ..., n-1}`, scoped to this module.
///
/// θ is only ever touched from leaf processing on one thread (§5), so there
/// is no need for concurrent, atomic union-find machinery here; this keeps
/// only the union-by-min rule: the smaller root always wins, so a set's
/// representative is always its minimum element — exactly what
/// `calculate_mcr` wants.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if ra < rb {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
        }
    }
}

/// Unions θ's cells containing elements of the same cycle of `aut` (§4.5).
///
/// Re-unions `theta`'s existing cells first (so earlier merges aren't lost),
/// then walks every cycle of `aut` and unions consecutive cycle elements.
/// The result is rebuilt as a fresh [`Partition`] from the union-find's
/// final groups, ordered by each group's minimum element.
pub fn merge_permutation_into_orbit(aut: &Partition, theta: &Partition) -> Partition {
    let n = aut.len();
    debug_assert_eq!(n, theta.len());
    let mut uf = UnionFind::new(n);

    for (start, size) in theta.cells() {
        let members = &theta.lab()[start..start + size];
        for pair in members.windows(2) {
            uf.union(pair[0], pair[1]);
        }
    }

    let image = aut.lab();
    let mut visited = vec![false; n];
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut v = start;
        loop {
            visited[v] = true;
            let next = image[v];
            uf.union(start, next);
            if next == start {
                break;
            }
            v = next;
        }
    }

    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for v in 0..n {
        let root = uf.find(v);
        groups.entry(root).or_default().push(v);
    }

    let mut lab = Vec::with_capacity(n);
    let mut ptn = Vec::with_capacity(n);
    for members in groups.values() {
        for (i, &v) in members.iter().enumerate() {
            lab.push(v);
            ptn.push(i + 1 != members.len());
        }
    }
    Partition::from_parts(lab, ptn)
}

/// For each θ-cell, its smallest element, ascending (§4.5).
pub fn calculate_mcr(theta: &Partition) -> Vec<usize> {
    let mut mcr: Vec<usize> = theta
        .cells()
        .into_iter()
        .map(|(start, size)| {
            *theta.lab()[start..start + size]
                .iter()
                .min()
                .expect("a partition cell is never empty")
        })
        .collect();
    mcr.sort_unstable();
    mcr
}
