use anchor_lang::prelude::*;

use crate::error::StepLaunchError;

/// Current price per whole curve unit, given cumulative base units sold.
///
/// The schedule is a staircase: flat within each `bucket_size`-unit bucket,
/// jumping by `price_step` at every bucket boundary.
///
/// ```text
///  Price
///    ^
///    |                ________
///    |         ______|
///    |        |
///    |  ______|
///    | |
///    |_|
///    +----------------------------> Units Sold
/// ```
///
/// Pure and deterministic: two calls with equal input always return equal
/// output, and the result never decreases as `units_sold` grows. The bucket
/// count uses truncating integer division; a fractional bucket never raises
/// the price.
pub fn unit_price(
    units_sold: u64,
    floor_price: u64,
    price_step: u64,
    bucket_size: u64,
) -> Result<u64> {
    require!(bucket_size > 0, StepLaunchError::InvalidBucketSize);

    let buckets = units_sold / bucket_size;
    floor_price
        .checked_add(
            price_step
                .checked_mul(buckets)
                .ok_or(StepLaunchError::Overflow)?,
        )
        .ok_or_else(|| error!(StepLaunchError::Overflow))
}

/// Total lamport cost of a purchase: the snapshot `unit_price` times the
/// requested quantity converted to whole curve units. The conversion
/// truncates; a sub-unit remainder is never charged for.
pub fn total_cost(unit_price: u64, units: u64, unit_scale: u64) -> Result<u64> {
    require!(unit_scale > 0, StepLaunchError::InvalidUnitScale);

    let whole_units = units / unit_scale;
    unit_price
        .checked_mul(whole_units)
        .ok_or_else(|| error!(StepLaunchError::Overflow))
}
