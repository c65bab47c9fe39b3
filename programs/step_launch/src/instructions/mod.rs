pub mod claim_referral;
pub mod close_sale;
pub mod create_listing;
pub mod initialize;
pub mod purchase;
pub mod views;
pub mod withdraw_fees;

pub use claim_referral::*;
pub use close_sale::*;
pub use create_listing::*;
pub use initialize::*;
pub use purchase::*;
pub use views::*;
pub use withdraw_fees::*;
