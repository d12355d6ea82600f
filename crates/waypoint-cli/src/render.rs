//! Text and JSON reports for computed graphs.
//!
//! Text renderers return the whole report as a `String` (one trailing
//! newline per line) so commands decide where it goes. They expect the graph
//! to be computed and propagate [`GraphError::StaleTable`] otherwise.

use serde::Serialize;
use waypoint_graph::{
    Graph, GraphError, GraphStatistics, ParsedGraph, RejectedEdge, Route, VertexId,
};

use crate::config::WaypointConfig;
use crate::ui::format_count;

/// Width of the label column in the all-pairs table.
const LABEL_WIDTH: usize = 29;

/// Printed instead of a table for a graph without vertices.
pub const EMPTY_GRAPH_MESSAGE: &str = "No graph to print. Please enter graph.";

/// All-pairs table: every source label followed by one row per other vertex.
///
/// ```text
/// Description                  From  To    Dist  Path
/// Aurora Street
///                              1     2     50    1 2
///                              1     3     70    1 2 3
/// ```
pub fn render_all(graph: &Graph, config: &WaypointConfig) -> Result<String, GraphError> {
    if graph.is_empty() {
        return Ok(format!("{EMPTY_GRAPH_MESSAGE}\n"));
    }

    let mut out = String::new();
    let header = format!(
        "{:<w$}{:<5} {:<5} {:<5} {}",
        "Description",
        "From",
        "To",
        "Dist",
        "Path",
        w = LABEL_WIDTH
    );
    push_line(&mut out, header.trim_end());

    for (source, label) in graph.vertices() {
        push_line(&mut out, label.as_str());
        for dest in graph.vertex_ids().filter(|&dest| dest != source) {
            let (distance, path) = match graph.shortest_path(source, dest)? {
                Route::Reachable(path) => (path.distance.to_string(), path.format_ids()),
                Route::Trivial | Route::Unreachable => {
                    (config.unreachable_marker.clone(), String::new())
                }
            };
            let row = format!(
                "{:w$}{:<5} {:<5} {:<5} {}",
                "",
                source,
                dest,
                distance,
                path,
                w = LABEL_WIDTH
            );
            push_line(&mut out, row.trim_end());
        }
    }
    Ok(out)
}

/// Single-pair report: `source dest distance path`, then the label of each
/// vertex on the path when `show_labels` is set.
pub fn render_pair(
    graph: &Graph,
    source: VertexId,
    dest: VertexId,
    config: &WaypointConfig,
) -> Result<String, GraphError> {
    let (distance, ids, on_path) = match graph.shortest_path(source, dest)? {
        Route::Trivial => ("0".to_string(), source.to_string(), vec![source]),
        Route::Reachable(path) => (
            path.distance.to_string(),
            path.format_ids(),
            path.vertices().collect(),
        ),
        Route::Unreachable => (config.unreachable_marker.clone(), String::new(), Vec::new()),
    };

    let mut out = String::new();
    let summary = format!("{source}  {dest}  {distance}    {ids}");
    push_line(&mut out, summary.trim_end());
    if config.show_labels {
        for vertex in on_path {
            push_line(&mut out, graph.label(vertex)?.as_str());
        }
    }
    Ok(out)
}

/// Validation summary for one parsed graph.
pub fn render_check(index: usize, parsed: &ParsedGraph) -> String {
    let stats = parsed.graph.statistics();
    let mut out = String::new();
    let summary = format!(
        "Graph {} (line {}): {}, {}, {}",
        index,
        parsed.line,
        format_count(stats.vertex_count, "vertex", "vertices"),
        format_count(stats.edge_count, "edge", "edges"),
        format_count(stats.source_count, "source", "sources"),
    );
    push_line(&mut out, &summary);
    for rejected in &parsed.rejected {
        let line = format!(
            "  line {}: edge {} -> {} (weight {}) rejected: {}",
            rejected.line, rejected.source, rejected.dest, rejected.weight, rejected.error
        );
        push_line(&mut out, &line);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// A vertex and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexReport {
    pub id: VertexId,
    pub label: String,
}

/// One ordered pair of distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub source: VertexId,
    pub dest: VertexId,
    pub route: Route,
}

/// JSON form of `waypoint show` for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    /// 1-based position of the graph in its file.
    pub graph: usize,
    pub line: usize,
    pub vertices: Vec<VertexReport>,
    pub routes: Vec<RouteReport>,
    pub rejected: Vec<RejectedEdge>,
}

impl GraphReport {
    /// Build the report for a computed graph.
    pub fn new(index: usize, parsed: &ParsedGraph) -> Result<Self, GraphError> {
        let graph = &parsed.graph;
        let vertices = graph
            .vertices()
            .map(|(id, label)| VertexReport {
                id,
                label: label.to_string(),
            })
            .collect();

        let mut routes = Vec::new();
        for source in graph.vertex_ids() {
            for dest in graph.vertex_ids().filter(|&dest| dest != source) {
                routes.push(RouteReport {
                    source,
                    dest,
                    route: graph.shortest_path(source, dest)?,
                });
            }
        }

        Ok(Self {
            graph: index,
            line: parsed.line,
            vertices,
            routes,
            rejected: parsed.rejected.clone(),
        })
    }
}

/// JSON form of `waypoint path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub graph: usize,
    pub source: VertexId,
    pub dest: VertexId,
    pub route: Route,
    /// Labels of the vertices on the path, source first.
    pub labels: Vec<String>,
}

impl PairReport {
    pub fn new(
        index: usize,
        graph: &Graph,
        source: VertexId,
        dest: VertexId,
    ) -> Result<Self, GraphError> {
        let route = graph.shortest_path(source, dest)?;
        let on_path: Vec<VertexId> = match &route {
            Route::Trivial => vec![source],
            Route::Reachable(path) => path.vertices().collect(),
            Route::Unreachable => Vec::new(),
        };
        let labels = on_path
            .into_iter()
            .map(|vertex| graph.label(vertex).map(|label| label.to_string()))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            graph: index,
            source,
            dest,
            route,
            labels,
        })
    }
}

/// JSON form of `waypoint check` for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub graph: usize,
    pub line: usize,
    pub statistics: GraphStatistics,
    pub rejected: Vec<RejectedEdge>,
}

impl CheckReport {
    pub fn new(index: usize, parsed: &ParsedGraph) -> Self {
        Self {
            graph: index,
            line: parsed.line,
            statistics: parsed.graph.statistics(),
            rejected: parsed.rejected.clone(),
        }
    }
}
