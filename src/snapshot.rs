//! Save and restore for a running simulation
//!
//! A snapshot is a versioned JSON envelope around [`GameState`]. The format
//! is opaque to callers; the contract is symmetry only - importing an
//! export reproduces an equivalent simulation, RNG stream included, so a
//! restored game plays out exactly like the one that was saved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GameState;

/// Schema tag stamped into every snapshot
pub const SNAPSHOT_SCHEMA: &str = "grid-horde.save.v1";

#[derive(Serialize, Deserialize)]
struct SnapshotV1 {
    schema: String,
    state: GameState,
}

/// Import failures
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("bad schema: {0}")]
    Schema(String),
    #[error("parse error")]
    Serde(#[from] serde_json::Error),
}

/// Serialize the full simulation into an opaque snapshot string
pub fn export_state(state: &GameState) -> Result<String, serde_json::Error> {
    let snapshot = SnapshotV1 {
        schema: SNAPSHOT_SCHEMA.to_string(),
        state: state.clone(),
    };
    serde_json::to_string(&snapshot)
}

/// Rebuild a simulation from a snapshot produced by [`export_state`]
pub fn import_state(raw: &str) -> Result<GameState, SnapshotError> {
    let snapshot: SnapshotV1 = serde_json::from_str(raw)?;
    if snapshot.schema != SNAPSHOT_SCHEMA {
        return Err(SnapshotError::Schema(snapshot.schema));
    }
    Ok(snapshot.state)
}
