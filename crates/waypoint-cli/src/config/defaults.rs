pub fn default_max_vertices() -> usize {
    waypoint_graph::DEFAULT_CAPACITY
}

pub fn default_unreachable_marker() -> String {
    "--".to_string()
}

pub fn default_show_labels() -> bool {
    true
}
