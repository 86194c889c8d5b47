//! The single error kind of the marquee core.
//!
//! Only construction can fail. Once a controller exists, every tick and
//! reset operation is total.

/// Errors raised by the marquee core.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarqueeError {
    /// The configuration cannot produce a valid controller.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the rejected parameter.
        reason: String,
    },
}

impl MarqueeError {
    /// Convenience constructor for a configuration rejection.
    pub fn invalid(reason: impl Into<String>) -> Self {
        MarqueeError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
