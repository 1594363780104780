//! Command implementations.

pub mod classify;
pub mod config;
pub mod stats;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::stats::execute_stats;
