//! Progress display for the interpretation request

pub mod spinner;
