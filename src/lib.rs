pub mod config;
pub mod format;
pub mod persist;
pub mod report;
pub mod system;
