//! The search driver (§4.3) and leaf processing (§4.4): the depth-first walk
//! of the ordered-partition tree that produces a canonical labeling and
//! automorphism group for a graph.

use std::cmp::Ordering;
use std::rc::Rc;
use std::time::Instant;

use canon_graph::Graph;
use log::{debug, info, trace};

use crate::config::SearchConfig;
use crate::invariant::{calculate_invariant, generate_permutation, is_automorphism, AdjacencyInvariant, Permutation};
use crate::observer::{NoopObserver, SearchObserver};
use crate::orbit::{calculate_mcr, merge_permutation_into_orbit};
use crate::partition::Partition;
use crate::refine::refine;

/// The output of [`canonicalize`] (§6): the chosen canonical labeling, a
/// generating set for the automorphism group, the orbit partition, and a
/// diagnostic node count.
#[derive(Clone, Debug)]
pub struct CanonResult {
    /// The permutation realizing the canonical form: `cl.lab()[v]` is the
    /// position `v` is sent to in the canonical labeling.
    pub cl: Permutation,

    /// A generating set for Aut(G). Not necessarily minimal or complete as
    /// a list of *all* automorphisms, but every permutation in it is a true
    /// automorphism, and together they generate the full group.
    pub autogrp: Vec<Permutation>,

    /// The orbit partition under `⟨autogrp⟩`.
    pub theta: Partition,

    /// One representative (the smallest vertex) per `theta`-cell, ascending.
    pub mcr: Vec<usize>,

    /// Number of search nodes popped from the stack during this run.
    pub nodes_processed: u64,
}

/// A node of the search tree: the path of individualized vertices from the
/// root, and the (shared) refined partition at this point. Partitions are
/// shared parent-to-children via `Rc` rather than a hand-rolled refcount
/// (§9): a node's `Rc<Partition>` is simply dropped once it is popped and
/// either consumed as a leaf or used to build children's own partitions.
struct SearchNode {
    path: Vec<usize>,
    pi: Rc<Partition>,
}

/// Mutable state threaded through the whole search: the running best-so-far
/// canonical label and the automorphism/orbit bookkeeping (§3).
struct SearchState {
    /// The identity labeling, against which every leaf's permutation is
    /// computed via `generate_permutation`.
    base: Partition,
    cl: Option<Permutation>,
    cl_pi: Option<Partition>,
    best_invar: Option<AdjacencyInvariant>,
    autogrp: Vec<Permutation>,
    theta: Partition,
    mcr: Vec<usize>,
    nodes_processed: u64,
}

/// Computes a canonical labeling and automorphism group for `g`, with
/// default (unbounded) search limits.
pub fn canonicalize(g: &Graph) -> CanonResult {
    canonicalize_with_config(g, &SearchConfig::default(), &mut NoopObserver)
}

/// The full driver (§4.3): same as [`canonicalize`], but with an explicit
/// [`SearchConfig`] (node/time budget) and a [`SearchObserver`] hook for
/// watching the search without modifying it.
pub fn canonicalize_with_config(
    g: &Graph,
    config: &SearchConfig,
    observer: &mut dyn SearchObserver,
) -> CanonResult {
    let n = g.node_count();

    if n == 0 {
        return CanonResult {
            cl: Partition::discrete(Vec::new()),
            autogrp: Vec::new(),
            theta: Partition::discrete(Vec::new()),
            mcr: Vec::new(),
            nodes_processed: 0,
        };
    }

    let start_time = Instant::now();
    let mut state = SearchState {
        base: Partition::discrete((0..n).collect()),
        cl: None,
        cl_pi: None,
        best_invar: None,
        autogrp: Vec::new(),
        theta: Partition::discrete((0..n).collect()),
        mcr: Vec::new(),
        nodes_processed: 0,
    };
    state.mcr = calculate_mcr(&state.theta);

    let unit = Partition::unit(n);
    let root = refine(g, &unit, &unit);

    let mut stack: Vec<SearchNode> = Vec::new();
    state.nodes_processed += 1;
    expand(g, Vec::new(), root, &mut stack, &mut state, observer);

    while let Some(node) = stack.pop() {
        if budget_exhausted(config, &state) {
            debug!(
                "canonicalize: search budget exhausted after {} nodes",
                state.nodes_processed
            );
            break;
        }
        state.nodes_processed += 1;

        let last = *node.path.last().expect(
            "every node pushed onto the stack carries at least one individualized vertex",
        );
        // `node.pi` still holds `last` inside whatever cell the parent's
        // target-cell split it from; individualize carves it out into its
        // own singleton before refining against it (glossary: individualization).
        let pos = node
            .pi
            .lab()
            .iter()
            .position(|&v| v == last)
            .expect("the path's vertices are always present in the shared parent partition");
        let individualized = node.pi.individualize(pos);
        let active = Partition::discrete(vec![last]);
        let refined = refine(g, &individualized, &active);
        trace!("path={:?} refined={}", node.path, refined);
        expand(g, node.path, refined, &mut stack, &mut state, observer);
    }

    info!(
        "canonicalize: n={} nodes_processed={} automorphisms={} elapsed={:?}",
        n,
        state.nodes_processed,
        state.autogrp.len(),
        start_time.elapsed()
    );

    CanonResult {
        cl: state
            .cl
            .expect("a graph with at least one vertex always reaches at least one leaf"),
        autogrp: state.autogrp,
        theta: state.theta,
        mcr: state.mcr,
        nodes_processed: state.nodes_processed,
    }
}

fn budget_exhausted(config: &SearchConfig, state: &SearchState) -> bool {
    if let Some(budget) = config.node_budget {
        if state.nodes_processed >= budget {
            return true;
        }
    }
    if let Some(deadline) = config.deadline {
        if Instant::now() >= deadline {
            return true;
        }
    }
    false
}

/// Dispatches a freshly refined partition: a leaf is handed to
/// [`process_leaf`]; anything else has its target cell expanded into
/// children pushed onto `stack` (§4.3 steps 4-5).
fn expand(
    g: &Graph,
    path: Vec<usize>,
    pi: Partition,
    stack: &mut Vec<SearchNode>,
    state: &mut SearchState,
    observer: &mut dyn SearchObserver,
) {
    if pi.is_discrete() {
        trace!("leaf at depth {} pi={}", path.len(), pi);
        process_leaf(g, &pi, state, observer);
    } else {
        push_children(stack, path, Rc::new(pi));
    }
}

/// Individualizes every vertex of the target cell in turn, pushing one
/// child per vertex in reverse cell order so the stack (LIFO) pops them in
/// ascending order (§4.3).
fn push_children(stack: &mut Vec<SearchNode>, path: Vec<usize>, pi: Rc<Partition>) {
    let target = pi
        .target_cell()
        .expect("push_children is only called on a non-discrete partition");
    let (start, size) = pi
        .cells()
        .into_iter()
        .find(|&(cell_start, _)| cell_start == target)
        .expect("target_cell always returns the start of an existing cell");
    let members: Vec<usize> = pi.lab()[start..start + size].to_vec();

    for &v in members.iter().rev() {
        let mut child_path = path.clone();
        child_path.push(v);
        stack.push(SearchNode {
            path: child_path,
            pi: Rc::clone(&pi),
        });
    }
}

/// Leaf processing (§4.4): compares the leaf's invariant against the
/// running best, adopting a new canonical label, recording a new
/// automorphism generator, or discarding the leaf.
fn process_leaf(g: &Graph, leaf_pi: &Partition, state: &mut SearchState, observer: &mut dyn SearchObserver) {
    let perm = generate_permutation(&state.base, leaf_pi);
    let invar = calculate_invariant(g, &perm);

    match state.best_invar.as_ref().map(|best| invar.cmp(best)) {
        None | Some(Ordering::Less) => {
            debug!("canonicalize: new best canonical label, perm={}", perm);
            observer.on_new_cl(perm.lab());
            state.cl = Some(perm);
            state.cl_pi = Some(leaf_pi.clone());
            state.best_invar = Some(invar);
        }
        Some(Ordering::Equal) => {
            let cl_pi = state
                .cl_pi
                .as_ref()
                .expect("best_invar is only ever set alongside cl_pi");
            let aut = generate_permutation(cl_pi, leaf_pi);
            debug_assert!(
                is_automorphism(g, aut.lab()),
                "a leaf tying the best invariant must be a true automorphism of g"
            );
            state.theta = merge_permutation_into_orbit(&aut, &state.theta);
            state.mcr = calculate_mcr(&state.theta);
            observer.on_new_automorphism(aut.lab());
            state.autogrp.push(aut);
        }
        Some(Ordering::Greater) => {
            trace!("leaf invariant worse than best, discarding");
        }
    }
}
