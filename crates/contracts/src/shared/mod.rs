pub mod charts;
pub mod notice;
