//! Grouped aggregation and summary statistics over filtered tables.
//!
//! Both aggregators sum the rental count per distinct key present in the
//! input. Keys absent from the input are omitted rather than zero-filled.

pub mod aggregate;
pub mod summary;
pub mod types;
pub mod utility;
