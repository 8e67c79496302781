pub mod analyzers;
pub mod charts;
pub mod filter;
pub mod loader;
pub mod output;
pub mod records;
pub mod session;
pub mod view;
