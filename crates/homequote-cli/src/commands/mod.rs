pub mod lead;
pub mod quote;
pub mod rates;
