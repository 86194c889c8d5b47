//! Clock-conditioner models.
//!
//! The physical design feeds the controller from a differential clock input,
//! either buffered directly or run through a PLL that takes some cycles to
//! lock. Neither primitive has a software equivalent; what the controller
//! actually consumes is one tick per clock edge plus a stability flag, so
//! that is what these models produce.

/// A behavioral model of the external clock conditioner.
///
/// Given the index of a delivered clock edge, reports whether the derived
/// clock was stable at that edge. The controller ignores ticks delivered
/// while unstable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockConditioner {
    /// Direct buffered clock: every edge is usable immediately.
    Bypass,
    /// PLL-derived clock: the first `lock_cycles` edges arrive before lock
    /// is achieved and must be ignored.
    Pll {
        /// Number of edges consumed acquiring lock.
        lock_cycles: u64,
    },
}

impl ClockConditioner {
    /// Returns whether the derived clock is stable at the given edge index
    /// (counting from zero).
    pub fn is_locked(&self, edge_index: u64) -> bool {
        match self {
            ClockConditioner::Bypass => true,
            ClockConditioner::Pll { lock_cycles } => edge_index >= *lock_cycles,
        }
    }
}

impl Default for ClockConditioner {
    fn default() -> Self {
        ClockConditioner::Bypass
    }
}
