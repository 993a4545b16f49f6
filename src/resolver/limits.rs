//! Resolution depth ceiling.

use super::error::ResolveError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Depth allowed when no limits are given.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Resource ceiling for one resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveLimits {
    max_depth: usize,
}

impl ResolveLimits {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ResolveLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Counts nested resolution frames and refuses to go past the ceiling.
///
/// Statement resolution and loop iterations each enter a frame. A loop
/// keeps its iteration frames entered until it ends, so a loop that never
/// clears its stop flag runs into the ceiling instead of spinning forever.
#[derive(Clone, Debug)]
pub struct DepthGuard {
    depth: usize,
    limit: usize,
}

impl DepthGuard {
    pub fn new(limits: ResolveLimits) -> Self {
        Self {
            depth: 0,
            limit: limits.max_depth(),
        }
    }

    /// Enter one frame, returning the new depth.
    pub fn enter(&mut self) -> Result<usize, ResolveError> {
        if self.depth >= self.limit {
            warn!(limit = self.limit, "resolution depth limit reached");
            return Err(ResolveError::DepthLimitExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(self.depth)
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop every frame entered above `depth`.
    pub fn unwind_to(&mut self, depth: usize) {
        self.depth = self.depth.min(depth);
    }
}

impl Default for DepthGuard {
    fn default() -> Self {
        Self::new(ResolveLimits::default())
    }
}
