//! All-pairs shortest paths by repeated single-source Dijkstra.
//!
//! The engine only reads adjacency lists and only writes the
//! [`PathTable`]. It runs once per source vertex that has at least one
//! outgoing edge; rows for edgeless sources stay fully reset.

use tracing::{debug, trace};

use super::frontier::Frontier;
use super::store::VertexNode;
use super::table::PathTable;
use super::{Distance, VertexId};

/// Counters from one full computation, for logging and statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EngineRun {
    pub sources: usize,
    pub relaxations: usize,
    pub stale_skips: usize,
}

/// Reset `table` to `vertices.len()` and fill it from every source with edges.
pub(crate) fn compute_all_pairs(vertices: &[VertexNode], table: &mut PathTable) -> EngineRun {
    table.reset(vertices.len());

    let mut run = EngineRun::default();
    for (index, vertex) in vertices.iter().enumerate() {
        if vertex.edges.is_empty() {
            continue;
        }
        let source = VertexId::from_index(index);
        let (relaxations, stale_skips) = single_source(vertices, source, table);
        run.sources += 1;
        run.relaxations += relaxations;
        run.stale_skips += stale_skips;
    }

    debug!(
        vertices = vertices.len(),
        sources = run.sources,
        relaxations = run.relaxations,
        stale_skips = run.stale_skips,
        "computed all-pairs shortest paths"
    );
    run
}

/// Dijkstra from `source`, writing into `source`'s row of `table`.
///
/// Returns `(relaxations, stale_skips)`.
fn single_source(vertices: &[VertexNode], source: VertexId, table: &mut PathTable) -> (usize, usize) {
    let count = vertices.len();
    table.entry_mut(source, source).distance = Distance::ZERO;

    // Every vertex is seeded; the source first so it wins the tie at the top.
    let mut frontier = Frontier::with_capacity(count * 2);
    frontier.push(source, Distance::ZERO);
    for index in 0..count {
        let dest = VertexId::from_index(index);
        if dest != source {
            frontier.push(dest, Distance::Infinite);
        }
    }

    let mut relaxations = 0;
    let mut stale_skips = 0;

    for _ in 1..count {
        let Some(current) = next_unvisited(&mut frontier, table, source, &mut stale_skips) else {
            // Nothing left that this source can reach.
            break;
        };

        table.entry_mut(source, current).visited = true;
        let current_distance = table.distance(source, current);

        for edge in &vertices[current.index()].edges {
            let entry = table.entry(source, edge.dest);
            if entry.visited {
                continue;
            }
            let candidate = current_distance.extend(edge.weight);
            if candidate < entry.distance {
                let entry = table.entry_mut(source, edge.dest);
                entry.distance = candidate;
                entry.predecessor = Some(current);
                frontier.push(edge.dest, candidate);
                relaxations += 1;
                trace!(%source, via = %current, dest = %edge.dest, %candidate, "relaxed");
            }
        }
    }

    trace!(%source, leftover = frontier.len(), "single-source run finished");
    (relaxations, stale_skips)
}

/// Pop until an unvisited vertex surfaces, discarding stale entries.
fn next_unvisited(
    frontier: &mut Frontier,
    table: &PathTable,
    source: VertexId,
    stale_skips: &mut usize,
) -> Option<VertexId> {
    while let Some(entry) = frontier.pop() {
        if table.entry(source, entry.vertex).visited {
            *stale_skips += 1;
            continue;
        }
        return Some(entry.vertex);
    }
    None
}
