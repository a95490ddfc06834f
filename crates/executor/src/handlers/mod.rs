//! Command handlers, one module per area of the sett details flow.

pub mod session;
pub mod sett;
