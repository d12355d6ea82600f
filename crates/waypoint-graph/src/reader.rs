//! Reader for the line-oriented graph description format.
//!
//! One input may hold several graphs back to back. Each graph is:
//!
//! ```text
//! 3                 <- vertex count (first token of the line)
//! Aurora Street     <- one label per line, taken verbatim
//! Bellevue Square
//! Cedar Park
//! 1 2 50            <- source dest weight, whitespace separated,
//! 2 3 20               may span lines
//! 0 0 0             <- source 0 ends the edge list (rest of line ignored)
//! ```
//!
//! End of input also ends the edge list. Edges the graph rejects (unknown
//! vertex, negative weight) are logged, collected in
//! [`ParsedGraph::rejected`], and skipped; malformed text is a [`ReadError`].

use serde::Serialize;
use tracing::{debug, warn};

use super::{Graph, GraphError, VertexId};

/// One graph read from the input, plus the edges it refused.
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    pub graph: Graph,
    pub rejected: Vec<RejectedEdge>,
    /// One-based line of the vertex count that starts this graph.
    pub line: usize,
}

/// An edge triple that was well-formed text but rejected by the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEdge {
    pub line: usize,
    pub source: i64,
    pub dest: i64,
    pub weight: i64,
    #[serde(serialize_with = "serialize_display")]
    pub error: GraphError,
}

/// Malformed graph description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("line {line}: expected a vertex count, found `{token}`")]
    InvalidVertexCount { line: usize, token: String },

    #[error("line {line}: graph declares {count} vertices but input ends after {found} labels")]
    MissingLabel {
        line: usize,
        count: usize,
        found: usize,
    },

    #[error("line {line}: expected an integer, found `{token}`")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: input ends in the middle of an edge triple")]
    TruncatedEdge { line: usize },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Read every graph in `input`. Each graph accepts at most `capacity`
/// vertices.
pub fn read_graphs(input: &str, capacity: usize) -> Result<Vec<ParsedGraph>, ReadError> {
    let mut cursor = Cursor::new(input);
    let mut graphs = Vec::new();
    while let Some(parsed) = read_graph(&mut cursor, capacity)? {
        graphs.push(parsed);
    }
    debug!(graphs = graphs.len(), "finished reading input");
    Ok(graphs)
}

fn read_graph(cursor: &mut Cursor<'_>, capacity: usize) -> Result<Option<ParsedGraph>, ReadError> {
    let Some((count_line, text)) = cursor.next_nonblank_line() else {
        return Ok(None);
    };
    let token = text.split_whitespace().next().unwrap_or_default();
    let count: usize = token.parse().map_err(|_| ReadError::InvalidVertexCount {
        line: count_line,
        token: token.to_string(),
    })?;
    if count > capacity {
        return Err(ReadError::Graph {
            line: count_line,
            source: GraphError::CapacityExceeded { capacity },
        });
    }

    let mut graph = Graph::with_capacity(capacity);
    for found in 0..count {
        let Some((line, label)) = cursor.next_line() else {
            return Err(ReadError::MissingLabel {
                line: count_line,
                count,
                found,
            });
        };
        graph
            .add_vertex(label)
            .map_err(|source| ReadError::Graph { line, source })?;
    }

    let mut rejected = Vec::new();
    while let Some((line, token)) = cursor.next_token() {
        let source = parse_int(line, token)?;
        if source == 0 {
            cursor.discard_line();
            break;
        }
        let dest = cursor.expect_int(line)?;
        let weight = cursor.expect_int(line)?;

        if let Err(error) = graph.insert_edge(vertex_id(source), vertex_id(dest), weight) {
            warn!(line, source, dest, weight, %error, "skipping edge");
            rejected.push(RejectedEdge {
                line,
                source,
                dest,
                weight,
                error,
            });
        }
    }

    debug!(
        line = count_line,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        rejected = rejected.len(),
        "read graph"
    );
    Ok(Some(ParsedGraph {
        graph,
        rejected,
        line: count_line,
    }))
}

/// Negative ids map to `0`, which no graph accepts.
fn vertex_id(raw: i64) -> VertexId {
    VertexId::new(usize::try_from(raw).unwrap_or(0))
}

fn parse_int(line: usize, token: &str) -> Result<i64, ReadError> {
    token.parse().map_err(|_| ReadError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

fn serialize_display<S: serde::Serializer>(
    value: &GraphError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Line and token cursor with one-based line numbers.
struct Cursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    tokens: std::str::SplitWhitespace<'a>,
    token_line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            tokens: "".split_whitespace(),
            token_line: 0,
        }
    }

    /// Next whole line. Drops any unread tokens of the current line.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.discard_line();
        self.lines.next().map(|(index, line)| (index + 1, line))
    }

    fn next_nonblank_line(&mut self) -> Option<(usize, &'a str)> {
        loop {
            let (line, text) = self.next_line()?;
            if !text.trim().is_empty() {
                return Some((line, text));
            }
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some(token) = self.tokens.next() {
                return Some((self.token_line, token));
            }
            let (line, text) = self.lines.next().map(|(index, line)| (index + 1, line))?;
            self.tokens = text.split_whitespace();
            self.token_line = line;
        }
    }

    /// Next token of an edge triple that started on `start_line`.
    fn expect_int(&mut self, start_line: usize) -> Result<i64, ReadError> {
        let (line, token) = self
            .next_token()
            .ok_or(ReadError::TruncatedEdge { line: start_line })?;
        parse_int(line, token)
    }

    fn discard_line(&mut self) {
        self.tokens = "".split_whitespace();
    }
}
