//! Review lift calculator: how many 5-star reviews a business needs to hit a
//! target rating, and what the resulting traffic is worth per month.

pub mod domain;
pub mod util;
