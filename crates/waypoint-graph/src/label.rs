use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable description attached to a vertex.
///
/// Labels are opaque: the graph never interprets them, it only stores and
/// returns them. They are usually read verbatim from one input line, so they
/// may contain spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexLabel(String);

impl VertexLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexLabel {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for VertexLabel {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for VertexLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
