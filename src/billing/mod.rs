pub mod estimate;
pub mod pricing;
pub mod rate_code;
pub mod report;
pub mod types;

pub use types::{OutputRow, RateCodeHit, UsageLine};
