//! Static page content. Components render these tables as-is.

pub mod careers;
pub mod company;
pub mod services;
