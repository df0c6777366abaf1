//! Language-neutral chart specifications.
//!
//! The backend decides what is drawn (series, axis titles, resolved colours);
//! the frontend only turns these specs into SVG.

pub mod palette;
pub mod spec;

pub use palette::*;
pub use spec::*;
