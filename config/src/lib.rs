//! # Config Crate
//!
//! Centralized configuration constants for the marker box generator.
//! Tolerances, tessellation rules, layout ratios and the named parameter
//! presets live here so the dictionary, mesh and box crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{circle_segments, DEFAULT_ID_PRESET, EPSILON};
//!
//! let preset = DEFAULT_ID_PRESET;
//! assert!(preset.margin < preset.side / 2.0);
//!
//! let segments = circle_segments(5.0);
//! assert!(segments >= 3);
//! assert!(EPSILON < 1e-6);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every literal that shapes the output box is
//!   defined once
//! - **Millimetres everywhere**: all lengths are in mm
//! - **No dependencies**: usable from every other crate in the workspace

pub mod constants;
