//! Simulation error types.

use std::io;

use marquee_core::MarqueeError;

/// Errors that can occur while setting up or running the tick harness.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The controller configuration was rejected at construction.
    #[error(transparent)]
    Config(#[from] MarqueeError),

    /// An I/O error occurred while writing trace data.
    #[error("trace I/O error: {0}")]
    TraceIo(#[from] io::Error),
}
