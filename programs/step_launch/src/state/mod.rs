pub mod config;
pub mod listing;
pub mod referral;
pub mod registry;

pub use config::*;
pub use listing::*;
pub use referral::*;
pub use registry::*;
