//! Errors raised while encoding, decoding or restoring a snapshot.

use crate::core::Epoch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not encode store snapshot as {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    #[error("could not decode store snapshot from {format}: {reason}")]
    Decode { format: &'static str, reason: String },

    #[error("snapshot layout v{found} cannot be restored, this store reads v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Restoring would leave a hole in the append-only log of a variable.
    #[error(
        "entry for `{name}` in {epoch} claims index {index}, \
         but only {expected} earlier entries were restored"
    )]
    IndexGap {
        name: String,
        epoch: Epoch,
        index: usize,
        expected: usize,
    },
}
