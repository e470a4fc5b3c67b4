//! CLI command implementations.
//!
//! Available commands:
//! - **evaluate**: Score one indicator and render the full report
//! - **curve**: Render only the sampled curve and markers
//! - **init**: Write a default `.metasim.toml`

pub mod curve;
pub mod evaluate;
pub mod init;

pub use curve::handle_curve;
pub use evaluate::{build_evaluate_config, handle_evaluate, EvaluateConfig};
