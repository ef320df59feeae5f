use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic run ID (content hash of simulation config + master seed).
///
/// Uses BLAKE3 for stable, collision-resistant hashing across builds and
/// platforms. The runner computes it from the canonical JSON of its config;
/// the RNG hierarchy folds it into every sub-seed so two runs with different
/// configs never share a random stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Hash arbitrary canonical bytes into a run ID.
    pub fn from_content(content: &[u8]) -> Self {
        Self(blake3::hash(content).to_hex().to_string())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Short prefix for file names and log lines.
    ///
    /// Internally generated ids are hex, but `new` accepts arbitrary
    /// strings, so the cut backs off to the nearest char boundary.
    pub fn short(&self) -> &str {
        let mut end = self.0.len().min(12);
        while !self.0.is_char_boundary(end) {
            end -= 1;
        }
        &self.0[..end]
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
