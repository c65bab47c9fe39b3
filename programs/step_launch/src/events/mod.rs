pub mod fees_withdrawn;
pub mod listing_created;
pub mod referral_claimed;
pub mod sale_closed;
pub mod tokens_purchased;

pub use fees_withdrawn::*;
pub use listing_created::*;
pub use referral_claimed::*;
pub use sale_closed::*;
pub use tokens_purchased::*;
