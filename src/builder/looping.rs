//! Builder for do-while loops.

use super::error::BuildError;
use super::statement::Loop;
use crate::control::{Body, DoWhile};
use crate::core::Name;
use std::sync::Arc;

/// Builder for loops with a fluent API.
#[derive(Default)]
pub struct LoopBuilder {
    body: Option<Arc<dyn Body>>,
    stop: Option<Name>,
}

impl LoopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loop body (required).
    pub fn body(mut self, body: impl Body + 'static) -> Self {
        self.body = Some(Arc::new(body));
        self
    }

    /// Set the flag whose `False` ends the loop (required).
    pub fn until_false(mut self, stop: &Name) -> Self {
        self.stop = Some(stop.clone());
        self
    }

    pub fn build(self) -> Result<Loop, BuildError> {
        let body = self.body.ok_or(BuildError::MissingBody)?;
        let stop = self.stop.ok_or(BuildError::MissingStopFlag)?;
        Ok(DoWhile::new(body, stop))
    }
}
