use super::utils::{BestPathResult, resolve_path};
use crate::balance::{BalanceTable, balance_of};
use crate::catalog::{Album, AlbumId};
use crate::error::GraphResult;
use crate::graph::BalanceGraph;
use crate::pathfinding_config::PathSearchConfig;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::debug;

struct Candidate {
    path: Vec<AlbumId>,
    score: usize,
}

/// What one subtree of the search found. Subtrees are merged in exploration
/// order, so an earlier candidate survives a later one of equal score.
#[derive(Default)]
struct BranchOutcome {
    best: Option<Candidate>,
    complete_paths: usize,
}

impl BranchOutcome {
    fn complete(candidate: Candidate) -> Self {
        Self {
            best: Some(candidate),
            complete_paths: 1,
        }
    }

    fn merge(&mut self, later: BranchOutcome) {
        self.complete_paths += later.complete_paths;
        self.best = match (self.best.take(), later.best) {
            (Some(current), Some(found)) if found.score > current.score => Some(found),
            (Some(current), _) => Some(current),
            (None, found) => found,
        };
    }
}

struct SearchContext<'a> {
    graph: &'a BalanceGraph,
    target: AlbumId,
    config: &'a PathSearchConfig,
    balances: BalanceTable,
    reference_balance: i64,
}

impl SearchContext<'_> {
    fn score(&self, path: &[AlbumId]) -> usize {
        path.iter()
            .filter(|album_id| {
                self.balances
                    .get(**album_id)
                    .is_some_and(|balance| balance > self.reference_balance)
            })
            .count()
    }
}

/// The DFS stack: `partial` mirrors the recursion exactly.
struct PathState {
    partial: Vec<AlbumId>,
    on_path: FxHashSet<AlbumId>,
}

impl PathState {
    fn new(start: AlbumId) -> Self {
        let mut on_path = FxHashSet::default();
        on_path.insert(start);

        Self {
            partial: vec![start],
            on_path,
        }
    }

    fn push(&mut self, album_id: AlbumId) {
        self.partial.push(album_id);
        self.on_path.insert(album_id);
    }

    fn pop(&mut self) {
        if let Some(album_id) = self.partial.pop() {
            self.on_path.remove(&album_id);
        }
    }
}

fn explore(context: &SearchContext, state: &mut PathState) -> BranchOutcome {
    let Some(&current) = state.partial.last() else {
        return BranchOutcome::default();
    };

    if current == context.target {
        return BranchOutcome::complete(Candidate {
            path: state.partial.clone(),
            score: context.score(&state.partial),
        });
    }

    let mut outcome = BranchOutcome::default();

    for &(next, weight) in context.graph.successors(current) {
        if !context.config.allows(weight) || state.on_path.contains(&next) {
            continue;
        }

        state.push(next);
        let branch = explore(context, state);
        state.pop();

        outcome.merge(branch);
    }

    outcome
}

/// Finds the simple path from `start` to `target`, over edges allowed by
/// `config`, that visits the most albums whose balance exceeds the balance
/// of `start`. Among equal scores the first path in depth-first order wins.
///
/// Every simple path is enumerated, so the cost grows exponentially with
/// the vertex count. Keep graphs small.
pub fn find_best_path(
    graph: &BalanceGraph,
    start: &Album,
    target: &Album,
    config: &PathSearchConfig,
) -> GraphResult<BestPathResult> {
    let start_id = graph.require_vertex(start)?;
    let target_id = graph.require_vertex(target)?;

    let search_timer = Instant::now();

    let context = SearchContext {
        graph,
        target: target_id,
        config,
        balances: BalanceTable::compute(graph),
        reference_balance: balance_of(graph, start)?,
    };

    let mut state = PathState::new(start_id);
    let outcome = explore(&context, &mut state);

    let (path, score) = outcome
        .best
        .map(|candidate| (resolve_path(graph, &candidate.path), candidate.score))
        .unwrap_or_default();

    let search_duration = search_timer.elapsed().as_secs_f64();

    debug!(
        start = start_id,
        target = target_id,
        threshold = config.threshold,
        complete_paths = outcome.complete_paths,
        score,
        path_len = path.len(),
        "Constrained path search finished"
    );

    Ok(BestPathResult {
        path,
        score,
        reference_balance: context.reference_balance,
        complete_paths: outcome.complete_paths,
        search_duration,
    })
}
