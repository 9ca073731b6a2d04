pub mod config;
pub mod log;
pub mod publish;
pub mod version;
