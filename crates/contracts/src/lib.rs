//! Shared types between the backend API and the leptos frontend.
//!
//! Everything here must compile for both native and `wasm32-unknown-unknown`,
//! so the crate stays free of IO and async.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
