//! `world-rank` library crate.
//!
//! The binary (`worldrank`) is a thin wrapper around this library so that:
//!
//! - core scoring logic is testable without spawning processes
//! - modules are reusable (e.g., future service front-ends, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod calibration;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod income;
pub mod math;
pub mod percentile;
pub mod report;
pub mod score;
