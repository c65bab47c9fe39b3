use anchor_lang::prelude::*;

use crate::error::StepLaunchError;

/// One token sale. Created once per mint, mutated only by `purchase` and
/// `close_sale`, never deleted: closed listings remain as auditable records.
#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub token_mint: Pubkey,
    pub creator: Pubkey,

    // Free-form metadata, stored as supplied. Content is never validated.
    #[max_len(32)]
    pub name: String,
    #[max_len(200)]
    pub image_uri: String,
    #[max_len(250)]
    pub description: String,

    /// Cumulative base units sold. Never decreases.
    pub units_sold: u64,
    /// Cumulative creator proceeds, net of fees. Never decreases.
    pub amount_raised: u64,

    /// False is terminal: once closed a listing never reopens.
    pub is_open: bool,
    /// Settlement lock. Held across the external transfers of a mutating
    /// call so a re-entrant invocation fails before touching state.
    pub settling: bool,

    /// Position in the registry's creation-order sequence.
    pub index: u64,
    pub bump: u8,
}

impl Listing {
    /// Takes the settlement lock. Fails when a mutating call on this listing
    /// is already in flight.
    pub fn begin_settlement(&mut self) -> Result<()> {
        require!(!self.settling, StepLaunchError::ReentrantCall);
        self.settling = true;
        Ok(())
    }

    pub fn end_settlement(&mut self) {
        self.settling = false;
    }

    /// Records an accepted purchase and evaluates the closure thresholds.
    /// The thresholds are checked strictly after the purchase is applied, so
    /// the purchase that crosses a threshold still commits in full.
    ///
    /// Returns true when this purchase closed the sale.
    pub fn record_purchase(
        &mut self,
        units: u64,
        creator_proceeds: u64,
        supply_cap: u64,
        raise_target: u64,
    ) -> Result<bool> {
        self.units_sold = self
            .units_sold
            .checked_add(units)
            .ok_or(StepLaunchError::Overflow)?;
        self.amount_raised = self
            .amount_raised
            .checked_add(creator_proceeds)
            .ok_or(StepLaunchError::Overflow)?;

        if self.units_sold >= supply_cap || self.amount_raised >= raise_target {
            self.is_open = false;
            return Ok(true);
        }

        Ok(false)
    }

    /// Transitions to closed. Idempotent: closing an already-closed listing
    /// is a no-op, not an error.
    pub fn mark_closed(&mut self) {
        self.is_open = false;
    }

    /// Fails with `SaleClosed` once the listing is terminal.
    pub fn ensure_open(&self) -> Result<()> {
        require!(self.is_open, StepLaunchError::SaleClosed);
        Ok(())
    }

    /// Fails with `NotAuthorized` unless `caller` is the recorded creator.
    pub fn ensure_creator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, StepLaunchError::NotAuthorized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNIT_SCALE;
    use crate::state::Config;
    use crate::utils::{split_payment, total_cost, unit_price};

    fn open_listing() -> Listing {
        Listing {
            token_mint: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            name: "test".to_string(),
            image_uri: String::new(),
            description: String::new(),
            units_sold: 0,
            amount_raised: 0,
            is_open: true,
            settling: false,
            index: 0,
            bump: 255,
        }
    }

    #[test]
    fn record_purchase_accumulates() {
        let mut listing = open_listing();

        assert!(!listing.record_purchase(100, 40, 1_000, 1_000).unwrap());
        assert!(!listing.record_purchase(250, 90, 1_000, 1_000).unwrap());

        assert_eq!(listing.units_sold, 350);
        assert_eq!(listing.amount_raised, 130);
        assert!(listing.is_open);
    }

    #[test]
    fn closes_when_supply_cap_reached() {
        let mut listing = open_listing();

        assert!(!listing.record_purchase(600, 0, 1_000, u64::MAX).unwrap());
        // crosses the cap: still commits in full, then closes
        assert!(listing.record_purchase(600, 0, 1_000, u64::MAX).unwrap());

        assert_eq!(listing.units_sold, 1_200);
        assert!(!listing.is_open);
    }

    #[test]
    fn closes_when_raise_target_reached() {
        let mut listing = open_listing();

        assert!(listing.record_purchase(10, 5_000, u64::MAX, 5_000).unwrap());
        assert_eq!(listing.amount_raised, 5_000);
        assert!(!listing.is_open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut listing = open_listing();

        listing.mark_closed();
        assert!(!listing.is_open);
        listing.mark_closed();
        assert!(!listing.is_open);
    }

    #[test]
    fn only_the_creator_may_close() {
        let listing = open_listing();
        let outsider = Pubkey::new_unique();

        assert_eq!(
            listing.ensure_creator(&outsider).unwrap_err(),
            StepLaunchError::NotAuthorized.into()
        );
        assert!(listing.is_open);

        listing.ensure_creator(&listing.creator).unwrap();
    }

    #[test]
    fn closed_listing_rejects_purchases_without_effect() {
        let mut listing = open_listing();
        listing.record_purchase(500, 200, u64::MAX, u64::MAX).unwrap();
        listing.mark_closed();

        assert_eq!(
            listing.ensure_open().unwrap_err(),
            StepLaunchError::SaleClosed.into()
        );
        // the rejected purchase never reaches record_purchase
        assert_eq!(listing.units_sold, 500);
        assert_eq!(listing.amount_raised, 200);
        assert!(!listing.is_open);
    }

    #[test]
    fn underpaid_purchase_is_rejected_before_any_state_change() {
        let config = Config {
            operator: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            listing_fee: 0,
            floor_price: 100,
            price_step: 100,
            bucket_size: 10_000,
            min_purchase_units: 1,
            max_purchase_units: u64::MAX,
            supply_cap: u64::MAX,
            raise_target: u64::MAX,
            fee_operator_bps: 100,
            fee_referral_bps: 100,
            accrued_fees: 0,
            listings_created: 0,
            bump: 255,
        };
        let mut listing = open_listing();

        // 2 whole units at price 100 cost 200; one lamport short fails
        listing.ensure_open().unwrap();
        assert_eq!(
            config
                .quote_purchase(listing.units_sold, 2 * UNIT_SCALE, 199)
                .unwrap_err(),
            StepLaunchError::InsufficientFunds.into()
        );
        assert_eq!(listing.units_sold, 0);
        assert_eq!(listing.amount_raised, 0);
        assert!(listing.is_open);

        // the exact cost is accepted
        let (price, cost) = config
            .quote_purchase(listing.units_sold, 2 * UNIT_SCALE, 200)
            .unwrap();
        assert_eq!((price, cost), (100, 200));
    }

    #[test]
    fn settlement_lock_rejects_reentry() {
        let mut listing = open_listing();

        listing.begin_settlement().unwrap();
        assert_eq!(
            listing.begin_settlement().unwrap_err(),
            StepLaunchError::ReentrantCall.into()
        );

        listing.end_settlement();
        listing.begin_settlement().unwrap();
    }

    // Two purchases committed in sequence: the second must be priced from the
    // first one's updated units_sold baseline.
    #[test]
    fn sequential_purchases_reprice_from_committed_state() {
        let (floor, step, bucket) = (100, 100, 10_000);
        let mut listing = open_listing();

        let first = unit_price(listing.units_sold, floor, step, bucket).unwrap();
        assert_eq!(first, 100);
        let cost = total_cost(first, 6_000, 1).unwrap();
        let split = split_payment(cost, 100, 100, false).unwrap();
        listing
            .record_purchase(6_000, split.creator_proceeds, u64::MAX, u64::MAX)
            .unwrap();

        let second = unit_price(listing.units_sold, floor, step, bucket).unwrap();
        assert_eq!(second, 100);
        listing
            .record_purchase(6_000, 0, u64::MAX, u64::MAX)
            .unwrap();

        // third purchase starts past the 10_000 boundary and pays more
        let third = unit_price(listing.units_sold, floor, step, bucket).unwrap();
        assert_eq!(third, 200);
    }
}
