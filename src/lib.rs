pub mod display;
pub mod fake;
pub mod monitor;
