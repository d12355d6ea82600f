use waypoint_graph::VertexId;

/// Parse a 1-based vertex id.
///
/// Only checks the syntax; whether the id exists depends on the graph.
///
/// # Errors
///
/// Returns an error message for non-numeric input and for `0`.
pub fn parse_vertex_id(s: &str) -> Result<VertexId, String> {
    let raw: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Vertex id must be a positive integer: '{}'", s))?;
    if raw == 0 {
        return Err("Vertex ids start at 1".to_string());
    }
    Ok(VertexId::new(raw))
}

/// Parse an integer that must be at least 1.
pub fn parse_positive(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("Value must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(_) => Err(format!("Expected a positive integer: '{}'", s)),
    }
}
