//! Shared helpers for integration tests

#![allow(dead_code)]

use termseg::core::{SegmentChange, SegmentId};

/// Install a test log subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Changes recorded for one segment, in order
pub fn changes_for(log: &[(SegmentId, SegmentChange)], id: SegmentId) -> Vec<SegmentChange> {
    log.iter()
        .filter(|(seg, _)| *seg == id)
        .map(|(_, change)| *change)
        .collect()
}
