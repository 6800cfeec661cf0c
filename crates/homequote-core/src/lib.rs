pub mod error;
pub mod format;
pub mod quote;
pub mod rates;
pub mod session;
pub mod types;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "lead")]
pub mod lead;

pub use error::HomeQuoteError;
pub use types::*;

/// Standard result type for all homequote operations
pub type HomeQuoteResult<T> = Result<T, HomeQuoteError>;
