//! Utility modules: build info, config/log paths, logging setup.

pub mod build_info;
pub mod logging;
pub mod persistence;

pub use build_info::*;
