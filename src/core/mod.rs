pub mod buildcore;
pub mod config;
pub mod log;
pub mod queue;
