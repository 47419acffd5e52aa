pub mod chart;
pub mod court;
pub mod error;
pub mod free_throw;
pub mod gauges;
pub mod window;
