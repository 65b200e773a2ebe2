//! # Marker Box CLI
//!
//! Library side of the `generate-aruco` and `generate-roboasset-arucos`
//! binaries: argument definitions, interactive prompts, request resolution
//! and log setup.
//!
//! ## Flow
//!
//! ```text
//! GenerateArgs ──┐
//!                ├──▶ resolve_request ──▶ GenerationRequest ──▶ MarkerBox ──▶ STL
//! Prompter ──────┘
//! ```

pub mod args;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod request;

pub use args::{BatchArgs, GenerateArgs};
pub use error::{CliError, CliResult};
pub use generator::generator_path;
pub use logging::init_logging;
pub use output::stl_output_path;
pub use prompt::Prompter;
pub use request::{load_dictionary, resolve_request, GenerationRequest};
