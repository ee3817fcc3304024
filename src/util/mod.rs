pub mod browser;
pub mod log;
pub mod timer;
