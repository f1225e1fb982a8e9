pub mod duty_log;
pub mod planner;
pub mod stops;
pub mod sweeper;
