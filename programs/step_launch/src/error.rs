use anchor_lang::prelude::*;

#[error_code]
pub enum StepLaunchError {
    // Listing creation
    #[msg("Attached payment is below the listing fee")]
    FeeRequired,

    #[msg("Registry is at capacity")]
    RegistryFull,

    // Purchases
    #[msg("Sale is closed")]
    SaleClosed,

    #[msg("Requested units are below the per-purchase minimum")]
    AmountTooLow,

    #[msg("Requested units are above the per-purchase maximum")]
    AmountTooHigh,

    #[msg("Attached payment does not cover the purchase cost")]
    InsufficientFunds,

    // Authorization
    #[msg("Caller is not authorized for this operation")]
    NotAuthorized,

    // Registry views
    #[msg("Registry index is out of range")]
    IndexOutOfRange,

    // Withdrawals
    #[msg("Withdrawal exceeds the accrued balance")]
    InsufficientBalance,

    #[msg("No referral rewards to claim")]
    NothingToClaim,

    // Guards
    #[msg("Listing is already settling another mutating call")]
    ReentrantCall,

    // Deployment configuration
    #[msg("Fee basis points must sum to less than 10000")]
    InvalidFeeConfig,

    #[msg("Bucket size must be greater than zero")]
    InvalidBucketSize,

    #[msg("Minimum purchase must not exceed the maximum")]
    InvalidPurchaseBounds,

    #[msg("Unit scale must be greater than zero")]
    InvalidUnitScale,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    Overflow,
}
