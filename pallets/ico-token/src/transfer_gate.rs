//! Authorization decision consulted before funds leave an account.

use sp_runtime::RuntimeDebug;

use crate::milestones::Milestones;

/// Why a balance-moving operation was refused.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Denial {
    /// Transfers are globally switched off and the caller is not an agent.
    TransfersDisabled,
    /// The source wallet is still inside its vesting lock.
    WalletLocked,
}

/// Everything the gate needs to decide, read from storage by the pallet.
#[derive(Clone, Copy, RuntimeDebug)]
pub struct TransferGate {
    pub caller_is_agent: bool,
    pub transfers_enabled: bool,
    /// Source wallet may not move funds until fundraising concludes.
    pub locked_until_conclusion: bool,
    /// Source wallet may not move funds until one year after conclusion.
    pub locked_until_lockup_elapsed: bool,
    pub milestones: Milestones,
}

impl TransferGate {
    /// Full check for transfers and transfer-from.
    ///
    /// Agents pass unconditionally. Everyone else needs the global switch on, and
    /// then the source wallet's vesting lock (if any) must have been released.
    pub fn check(&self, now: u64) -> Result<(), Denial> {
        if self.caller_is_agent {
            return Ok(());
        }
        self.check_enabled()?;
        if self.locked_until_conclusion && !self.milestones.is_concluded(now) {
            return Err(Denial::WalletLocked);
        }
        if self.locked_until_lockup_elapsed && !self.milestones.lockup_elapsed(now) {
            return Err(Denial::WalletLocked);
        }
        Ok(())
    }

    /// Allowance changes only look at the global switch; agents are not exempt.
    pub fn check_enabled(&self) -> Result<(), Denial> {
        if self.transfers_enabled {
            Ok(())
        } else {
            Err(Denial::TransfersDisabled)
        }
    }
}
