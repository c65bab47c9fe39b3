use anchor_lang::prelude::*;

use crate::constants::HUNDRED_PERCENT_BPS;
use crate::error::StepLaunchError;

/// Exact three-way partition of a purchase payment.
/// `operator_fee + referral_reward + creator_proceeds == total_cost` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub operator_fee: u64,
    pub referral_reward: u64,
    pub creator_proceeds: u64,
}

/// Splits `total_cost` by basis points. Both fee legs round down, and every
/// truncated remainder lands in `creator_proceeds`, so the partition is
/// exact. Without a valid non-self referrer the referral share is not
/// withheld: it folds into the creator's proceeds.
pub fn split_payment(
    total_cost: u64,
    fee_operator_bps: u16,
    fee_referral_bps: u16,
    has_referrer: bool,
) -> Result<FeeSplit> {
    let operator_fee = bps_share(total_cost, fee_operator_bps);
    let referral_reward = if has_referrer {
        bps_share(total_cost, fee_referral_bps)
    } else {
        0
    };

    let creator_proceeds = total_cost
        .checked_sub(operator_fee)
        .and_then(|rest| rest.checked_sub(referral_reward))
        .ok_or(StepLaunchError::Overflow)?;

    Ok(FeeSplit {
        operator_fee,
        referral_reward,
        creator_proceeds,
    })
}

/// `amount * bps / 10_000`, widened to u128 so the product cannot overflow.
/// The result always fits: it is at most `amount`.
fn bps_share(amount: u64, bps: u16) -> u64 {
    (amount as u128 * bps as u128 / HUNDRED_PERCENT_BPS as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_an_exact_partition() {
        for total in [0u64, 1, 99, 10_000, 123_457, u64::MAX] {
            for (op, rf) in [(0u16, 0u16), (100, 100), (250, 50), (9_999, 0)] {
                for has_referrer in [true, false] {
                    let split = split_payment(total, op, rf, has_referrer).unwrap();
                    assert_eq!(
                        split
                            .operator_fee
                            .checked_add(split.referral_reward)
                            .and_then(|s| s.checked_add(split.creator_proceeds)),
                        Some(total)
                    );
                }
            }
        }
    }

    #[test]
    fn truncation_remainder_goes_to_the_creator() {
        // 1% of 999 truncates from 9.99 to 9
        let split = split_payment(999, 100, 100, true).unwrap();
        assert_eq!(split.operator_fee, 9);
        assert_eq!(split.referral_reward, 9);
        assert_eq!(split.creator_proceeds, 981);
    }

    #[test]
    fn missing_referrer_folds_the_share_into_proceeds() {
        let with = split_payment(10_000, 100, 100, true).unwrap();
        let without = split_payment(10_000, 100, 100, false).unwrap();

        assert_eq!(with.referral_reward, 100);
        assert_eq!(without.referral_reward, 0);
        assert_eq!(
            without.creator_proceeds,
            with.creator_proceeds + with.referral_reward
        );
        assert_eq!(with.operator_fee, without.operator_fee);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let split = split_payment(u64::MAX, 9_998, 1, true).unwrap();
        assert_eq!(
            split.operator_fee + split.referral_reward + split.creator_proceeds,
            u64::MAX
        );
    }
}
