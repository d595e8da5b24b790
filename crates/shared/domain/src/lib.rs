//! # Domain Models
//!
//! Plain data shared by the showcase crates, with minimal dependencies (`serde`, `bitflags`).
//! No I/O and no pattern logic lives here.

pub mod config;
pub mod constants;
pub mod patterns;
