//! Domain aggregates exposed by the showcase service layer.

pub mod types;
pub mod vehicle;
