//! Card catalog subdomain: the static table of card meanings.

pub mod record;
pub mod table;
