//! Configuration sources, lowest to highest priority

pub mod args;
pub mod env;
pub mod store;
