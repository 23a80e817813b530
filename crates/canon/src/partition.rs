use std::collections::BTreeSet;
use std::fmt;

/// An ordered partition of `{0, ..., n-1}`: a permutation `lab` of the
/// vertices together with cell-end flags `ptn`.
///
/// `ptn[i] == false` marks the last position of a cell; `ptn[i] == true`
/// means the cell continues at `i + 1`. A discrete partition (every cell a
/// singleton) doubles as a permutation: `lab` is then read as `lab[i]` is
/// the vertex placed at position `i`, or — when built via
/// [`crate::invariant::generate_permutation`] — as an image array where
/// `lab[v]` is the vertex `v` maps to.
///
/// There is deliberately no `sz`/cell-count field cached alongside `ptn`:
/// cell boundaries are derived from `ptn` on demand, so there is only ever
/// one source of truth for where a cell ends (see `DESIGN.md`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    lab: Vec<usize>,
    ptn: Vec<bool>,
}

impl Partition {
    /// The unit partition: one cell containing every vertex, in order.
    pub fn unit(n: usize) -> Self {
        let lab = (0..n).collect();
        let mut ptn = vec![true; n];
        if n > 0 {
            let last = n - 1;
            ptn[last] = false;
        }
        Partition { lab, ptn }
    }

    /// A discrete partition (every cell a singleton) with the given
    /// vertex order. Used both for genuinely discrete partitions reached by
    /// refinement and for permutations, which share the same shape.
    pub fn discrete(lab: Vec<usize>) -> Self {
        let ptn = vec![false; lab.len()];
        Partition { lab, ptn }
    }

    /// Builds a partition from explicit `lab`/`ptn` arrays.
    ///
    /// # Panics
    ///
    /// Panics (via `debug_assert!` only, in debug builds) if the arrays
    /// disagree in length or `ptn`'s last entry is not `false`.
    pub fn from_parts(lab: Vec<usize>, ptn: Vec<bool>) -> Self {
        debug_assert_eq!(lab.len(), ptn.len());
        debug_assert!(ptn.last().map(|last| !*last).unwrap_or(true));
        Partition { lab, ptn }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.lab.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lab.is_empty()
    }

    /// The vertex order. For a discrete partition built directly (not via
    /// `generate_permutation`), `lab[i]` is the vertex at position `i`.
    #[inline]
    pub fn lab(&self) -> &[usize] {
        &self.lab
    }

    #[inline]
    pub fn ptn(&self) -> &[bool] {
        &self.ptn
    }

    /// True iff every cell has size 1.
    pub fn is_discrete(&self) -> bool {
        self.ptn.iter().all(|&continues| !continues)
    }

    /// `(start, size)` for every cell, left to right.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, &continues) in self.ptn.iter().enumerate() {
            if !continues {
                out.push((start, i - start + 1));
                start = i + 1;
            }
        }
        out
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.ptn.iter().filter(|&&continues| !continues).count()
    }

    /// The `k`-th cell's `(start, size)`.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        self.cells()[k]
    }

    /// Number of sub-cells within the position range `[start, start + size)`.
    pub fn sub_cell_count(&self, start: usize, size: usize) -> usize {
        self.ptn[start..start + size]
            .iter()
            .filter(|&&continues| !continues)
            .count()
    }

    /// Index (within `[lo, hi)`) of the largest cell, ties broken by
    /// smallest index.
    pub fn largest_cell_index_in_range(&self, lo: usize, hi: usize) -> usize {
        let cells = self.cells();
        let mut best = lo;
        let mut best_size = cells[lo].1;
        for (k, &(_, size)) in cells.iter().enumerate().take(hi).skip(lo + 1) {
            if size > best_size {
                best = k;
                best_size = size;
            }
        }
        best
    }

    /// The index, within `self`, of the cell whose vertex *set* equals
    /// `other`'s `p`-th cell, or `None` if no such cell exists.
    pub fn index_of_cell_matching(&self, other: &Partition, p: usize) -> Option<usize> {
        let (o_start, o_size) = other.cell(p);
        let target: BTreeSet<usize> = other.lab[o_start..o_start + o_size]
            .iter()
            .copied()
            .collect();
        self.cells().into_iter().position(|(start, size)| {
            size == o_size
                && self.lab[start..start + size]
                    .iter()
                    .copied()
                    .collect::<BTreeSet<_>>()
                    == target
        })
    }

    /// Replaces `self`'s `j`-th cell's contents with `src`'s `t`-th cell's
    /// contents. The cell may change size; neighboring cells are unaffected.
    pub fn overwrite_cell_from(&mut self, src: &Partition, t: usize, j: usize) {
        let (s_start, s_size) = src.cell(t);
        let (d_start, d_size) = self.cell(j);
        let new_lab = src.lab[s_start..s_start + s_size].to_vec();
        let mut new_ptn = vec![true; s_size];
        if s_size > 0 {
            new_ptn[s_size - 1] = false;
        }
        self.lab.splice(d_start..d_start + d_size, new_lab);
        self.ptn.splice(d_start..d_start + d_size, new_ptn);
    }

    /// Appends `src`'s `i`-th cell to `self` as a new trailing cell.
    pub fn append_cell_from(&mut self, src: &Partition, i: usize) {
        let (start, size) = src.cell(i);
        self.lab.extend_from_slice(&src.lab[start..start + size]);
        let mut ptn_ext = vec![true; size];
        if size > 0 {
            let last = size - 1;
            ptn_ext[last] = false;
        }
        self.ptn.extend(ptn_ext);
    }

    /// Mutable access to the `[start, start + size)` slice of `lab`/`ptn`,
    /// for the scoped-degree split in [`crate::refine::refine`]. Kept
    /// crate-private: splitting a cell without maintaining the rest of the
    /// partition's invariants is only safe inside `refine`.
    pub(crate) fn cell_slice_mut(&mut self, start: usize, size: usize) -> (&mut [usize], &mut [bool]) {
        (
            &mut self.lab[start..start + size],
            &mut self.ptn[start..start + size],
        )
    }

    /// Target-cell selection (§4.2): the first position of the smallest
    /// non-trivial cell, with an early exit on the first size-2 cell found.
    ///
    /// Returns `None` if the partition is discrete (no non-trivial cell
    /// exists); callers must test [`Partition::is_discrete`] first.
    ///
    /// # Panics
    ///
    /// Panics (via `debug_assert!` only, in debug builds) if `self` is
    /// already discrete, since calling this without checking
    /// [`Partition::is_discrete`] first is a caller bug, not a recoverable
    /// condition.
    pub fn target_cell(&self) -> Option<usize> {
        debug_assert!(!self.is_discrete(), "target_cell called on a discrete partition");
        let mut best: Option<(usize, usize)> = None; // (size, start)
        let mut start = 0;
        for (i, &continues) in self.ptn.iter().enumerate() {
            if !continues {
                let size = i - start + 1;
                if size > 1 {
                    if size == 2 {
                        return Some(start);
                    }
                    if best.map(|(best_size, _)| size < best_size).unwrap_or(true) {
                        best = Some((size, start));
                    }
                }
                start = i + 1;
            }
        }
        best.map(|(_, start)| start)
    }

    /// Individualization (glossary): splits the cell containing position
    /// `pos` into the singleton `{lab[pos]}`, placed at the cell's original
    /// start, followed by the cell's other members in their original
    /// relative order.
    ///
    /// This is the symmetry-breaking half of the search step (§4.3):
    /// equitable refinement alone can never separate two vertices that are
    /// truly interchangeable (e.g. two leaves of a star), so the driver must
    /// carve one out explicitly before refining against it. A cell already a
    /// singleton is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn individualize(&self, pos: usize) -> Partition {
        let (start, size) = self
            .cells()
            .into_iter()
            .find(|&(s, sz)| pos >= s && pos < s + sz)
            .expect("pos must lie within a cell");

        let mut lab = self.lab.clone();
        let mut ptn = self.ptn.clone();
        if size > 1 {
            let v = lab[pos];
            lab.copy_within(start..pos, start + 1);
            lab[start] = v;
            ptn[start] = false;
        }
        Partition { lab, ptn }
    }
}

impl fmt::Display for Partition {
    /// Bracketed cell notation, e.g. `[0 2][1]` for θ = {{0,2},{1}}.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (start, size) in self.cells() {
            write!(f, "[")?;
            for (i, &v) in self.lab[start..start + size].iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
