pub mod aggregation;
pub mod charts;
pub mod service;
