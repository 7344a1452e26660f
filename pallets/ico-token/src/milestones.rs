//! Fundraising milestones and the time predicates derived from them.
//!
//! The current time is always passed in by the caller, so every predicate here is
//! a pure function of stored milestone state and the supplied timestamp.

use sp_runtime::RuntimeDebug;

/// Length of the post-sale lockup, in seconds.
pub const ONE_YEAR: u64 = 365 * 24 * 60 * 60;

/// Snapshot of the two independent fundraising facts.
#[derive(Clone, Copy, Default, PartialEq, Eq, RuntimeDebug)]
pub struct Milestones {
    /// End of the fundraising event (unix seconds), once fixed.
    pub ico_end_date: Option<u64>,
    /// Minimum raise reached. One-way latch.
    pub soft_cap_reached: bool,
}

impl Milestones {
    /// Fundraising has concluded: the end date is fixed and has been reached.
    pub fn is_concluded(&self, now: u64) -> bool {
        matches!(self.ico_end_date, Some(end) if now >= end)
    }

    /// At least one year has passed since the fundraising end date.
    pub fn lockup_elapsed(&self, now: u64) -> bool {
        matches!(self.ico_end_date, Some(end) if now >= end.saturating_add(ONE_YEAR))
    }
}
