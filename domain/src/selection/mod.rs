//! Selection subdomain: drawing the nine cards of a spread.

pub mod spread;
pub mod tracker;
