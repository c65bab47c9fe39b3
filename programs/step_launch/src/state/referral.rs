use anchor_lang::prelude::*;

use crate::error::StepLaunchError;

/// Per-referrer reward balance, created lazily on first accrual. The balance
/// only grows until the referrer drains it with `claim_referral`.
#[account]
#[derive(InitSpace)]
pub struct ReferralAccount {
    pub referrer: Pubkey,
    pub accrued: u64,
    pub bump: u8,
}

impl ReferralAccount {
    pub fn accrue(&mut self, amount: u64) -> Result<()> {
        self.accrued = self
            .accrued
            .checked_add(amount)
            .ok_or(StepLaunchError::Overflow)?;
        Ok(())
    }

    /// Zeroes the balance and returns the amount owed to the referrer.
    pub fn drain(&mut self) -> Result<u64> {
        require!(self.accrued > 0, StepLaunchError::NothingToClaim);
        let amount = self.accrued;
        self.accrued = 0;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrue_accumulates() {
        let mut account = ReferralAccount {
            referrer: Pubkey::new_unique(),
            accrued: 0,
            bump: 255,
        };

        account.accrue(10).unwrap();
        account.accrue(15).unwrap();
        assert_eq!(account.accrued, 25);
    }

    #[test]
    fn drain_zeroes_the_balance() {
        let mut account = ReferralAccount {
            referrer: Pubkey::new_unique(),
            accrued: 40,
            bump: 255,
        };

        assert_eq!(account.drain().unwrap(), 40);
        assert_eq!(account.accrued, 0);
        assert_eq!(
            account.drain().unwrap_err(),
            StepLaunchError::NothingToClaim.into()
        );
    }
}
